use sqlx::PgPool;

/// DDL for the notes table
pub const NOTES_TABLE_SQL: &str = include_str!("../../sql/notes.sql");

/// Advisory lock key serializing concurrent schema bootstraps
const SCHEMA_LOCK_KEY: i64 = 0x6e6f_7465_73;

/// Creates the notes table if it does not exist yet
///
/// Idempotent; safe to call on every startup and before each test run.
/// Concurrent `CREATE TABLE IF NOT EXISTS` can still collide in the catalog,
/// so the DDL runs under a transaction-scoped advisory lock.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::query(NOTES_TABLE_SQL).execute(&mut *tx).await?;

    tx.commit().await?;
    tracing::debug!("notes table ready");
    Ok(())
}
