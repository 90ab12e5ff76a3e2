use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use notes_api::api::{self, AppState};
use notes_api::config::{AppConfig, StorageBackend};
use notes_api::infrastructure::repositories::{InMemoryNoteRepository, PostgresNoteRepository};
use notes_api::infrastructure::schema::ensure_schema;
use notes_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    telemetry::init_tracing();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let state = match config.storage {
        StorageBackend::Postgres => {
            // Connect to database
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;

            ensure_schema(&pool)
                .await
                .context("Failed to create notes table")?;

            tracing::info!("Database connected successfully");
            AppState::new(PostgresNoteRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; notes are lost on shutdown");
            AppState::new(InMemoryNoteRepository::new())
        }
    };

    let app = api::router(state, &config.notes_prefix);

    // Start server
    let addr = config.listen_addr();
    tracing::info!(prefix = %config.notes_prefix, "Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind address")?;

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
