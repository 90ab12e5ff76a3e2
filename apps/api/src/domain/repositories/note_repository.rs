use async_trait::async_trait;

use crate::domain::note::{NewNote, Note, NoteChanges, NoteId, NoteResult};

/// Repository trait for notes
///
/// Defines the contract for persisting and retrieving notes.
/// Absence is reported as `Ok(None)`; only store failures are errors.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List every stored note, ordered by id
    async fn list(&self) -> NoteResult<Vec<Note>>;

    /// Find a note by its ID
    async fn find_by_id(&self, id: NoteId) -> NoteResult<Option<Note>>;

    /// Insert a note and return it with its store-assigned id
    async fn create(&self, note: NewNote) -> NoteResult<Note>;

    /// Replace title and content of an existing note
    ///
    /// Returns `Ok(None)` when no note has the given id.
    async fn update(&self, id: NoteId, changes: NoteChanges) -> NoteResult<Option<Note>>;

    /// Delete a note by ID
    ///
    /// Succeeds whether or not a row matched; callers that care must check
    /// existence first.
    async fn delete(&self, id: NoteId) -> NoteResult<()>;
}
