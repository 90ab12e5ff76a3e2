//! Integration tests for the PostgreSQL repository
//!
//! These tests run against the database named by DATABASE_URL and are
//! ignored by default: `cargo test -- --ignored` runs them. Each test works
//! only with the rows it creates, so they can share one database.

use notes_api::domain::note::{NewNote, NoteChanges, NoteError, NoteId};
use notes_api::domain::repositories::NoteRepository;
use notes_api::infrastructure::repositories::PostgresNoteRepository;
use notes_api::infrastructure::schema::ensure_schema;
use sqlx::PgPool;

/// Set up test database connection pool and make sure the table exists
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    ensure_schema(&pool)
        .await
        .expect("Failed to create notes table");

    pool
}

fn new_note(title: &str, content: &str) -> NewNote {
    NewNote::new(Some(title.to_string()), Some(content.to_string())).expect("valid note")
}

/// Remove a test note
async fn cleanup_note(pool: &PgPool, id: NoteId) {
    sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(id.value())
        .execute(pool)
        .await
        .expect("Failed to cleanup test note");
}

/// An id guaranteed not to exist: created and immediately removed
async fn vanished_id(repo: &PostgresNoteRepository, pool: &PgPool) -> NoteId {
    let note = repo
        .create(new_note("Temporary", "Temporary"))
        .await
        .expect("Failed to create note");
    cleanup_note(pool, note.id()).await;
    note.id()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_create_and_list() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note = repo
        .create(new_note("Title 1", "Content 1"))
        .await
        .expect("Failed to create note");

    let notes = repo.list().await.expect("Failed to list notes");
    assert!(
        notes.iter().any(|n| n.id() == note.id()),
        "Created note should be listed"
    );

    cleanup_note(&pool, note.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_find_by_id() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note = repo
        .create(new_note("Title 2", "Content 2"))
        .await
        .expect("Failed to create note");

    let found = repo
        .find_by_id(note.id())
        .await
        .expect("Failed to find note")
        .expect("Note should exist");

    assert_eq!(found.title(), "Title 2");
    assert_eq!(found.content(), "Content 2");

    cleanup_note(&pool, note.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_update() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note = repo
        .create(new_note("Title 3", "Content 3"))
        .await
        .expect("Failed to create note");

    let updated = repo
        .update(
            note.id(),
            NoteChanges::new(Some("Title update".into()), Some("Content update".into())),
        )
        .await
        .expect("Failed to update note")
        .expect("Note should exist");

    assert_eq!(updated.id(), note.id(), "Id must not change on update");
    assert_eq!(updated.title(), "Title update");
    assert_eq!(updated.content(), "Content update");

    cleanup_note(&pool, note.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_update_missing_note_returns_none() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());
    let id = vanished_id(&repo, &pool).await;

    let result = repo
        .update(id, NoteChanges::new(Some("T".into()), Some("C".into())))
        .await
        .expect("Update of a missing note is not an error");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_update_with_null_fields_violates_constraint() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note = repo
        .create(new_note("Keep", "Me"))
        .await
        .expect("Failed to create note");

    let err = repo
        .update(note.id(), NoteChanges::default())
        .await
        .expect_err("NOT NULL should reject the update");
    assert!(matches!(err, NoteError::Storage(_)));

    let stored = repo.find_by_id(note.id()).await.unwrap().unwrap();
    assert_eq!(stored.title(), "Keep");

    cleanup_note(&pool, note.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_delete() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note = repo
        .create(new_note("Title 4", "Content 4"))
        .await
        .expect("Failed to create note");

    repo.delete(note.id()).await.expect("Failed to delete note");

    let found = repo.find_by_id(note.id()).await.expect("Failed to query");
    assert!(found.is_none(), "Deleted note should be absent");

    // Deleting again is still confirmed
    repo.delete(note.id())
        .await
        .expect("Delete of a missing note is not an error");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_each_note_has_unique_id() {
    let pool = setup_test_db().await;
    let repo = PostgresNoteRepository::new(pool.clone());

    let note1 = repo.create(new_note("Note 1", "Content 1")).await.unwrap();
    let note2 = repo.create(new_note("Note 2", "Content 2")).await.unwrap();

    assert_ne!(note1.id(), note2.id());

    let found1 = repo.find_by_id(note1.id()).await.unwrap().unwrap();
    let found2 = repo.find_by_id(note2.id()).await.unwrap().unwrap();
    assert_eq!(found1.id(), note1.id());
    assert_eq!(found2.id(), note2.id());

    cleanup_note(&pool, note1.id()).await;
    cleanup_note(&pool, note2.id()).await;
}
