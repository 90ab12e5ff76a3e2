use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::note::{NewNote, Note, NoteChanges, NoteError, NoteId, NoteResult};
use crate::domain::repositories::NoteRepository;

/// PostgreSQL implementation of NoteRepository
///
/// Runs plain runtime-checked queries against the `notes` table through an
/// injected connection pool.
#[derive(Clone)]
pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    /// Creates a new PostgresNoteRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i32,
    title: String,
    content: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note::from_persistence(NoteId::new(row.id), row.title, row.content)
    }
}

impl From<sqlx::Error> for NoteError {
    fn from(err: sqlx::Error) -> Self {
        NoteError::Storage(err.to_string())
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn list(&self) -> NoteResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content
            FROM notes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: NoteId) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT id, title, content
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn create(&self, note: NewNote) -> NoteResult<Note> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content
            "#,
        )
        .bind(note.title())
        .bind(note.content())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: NoteId, changes: NoteChanges) -> NoteResult<Option<Note>> {
        // NULLs are bound as-is; the NOT NULL constraint rejects them.
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes
            SET title = $1, content = $2
            WHERE id = $3
            RETURNING id, title, content
            "#,
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    async fn delete(&self, id: NoteId) -> NoteResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes WHERE id = $1
            "#,
        )
        .bind(id.value())
        .execute(&self.pool)
        .await?;

        tracing::debug!(note_id = %id, rows = result.rows_affected(), "delete executed");

        Ok(())
    }
}
