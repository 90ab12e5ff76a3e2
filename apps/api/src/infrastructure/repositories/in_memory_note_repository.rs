use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::note::{NewNote, Note, NoteChanges, NoteError, NoteId, NoteResult};
use crate::domain::repositories::NoteRepository;

/// Process-local implementation of NoteRepository
///
/// Mirrors the table's behaviour: ids come from a sequence starting at 1 and
/// are never reused, writing a missing title or content fails like a
/// NOT NULL violation, and titles longer than `VARCHAR(255)` are refused.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    notes: BTreeMap<NoteId, Note>,
    last_id: i32,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Character limit of the `title` column
pub const TITLE_MAX_CHARS: usize = 255;

fn fits_title(title: &str) -> NoteResult<()> {
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(NoteError::Storage(format!(
            "value too long for type character varying({})",
            TITLE_MAX_CHARS
        )));
    }
    Ok(())
}

fn not_null(column: &str, value: Option<String>) -> NoteResult<String> {
    value.ok_or_else(|| {
        NoteError::Storage(format!(
            "null value in column \"{}\" of relation \"notes\" violates not-null constraint",
            column
        ))
    })
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list(&self) -> NoteResult<Vec<Note>> {
        let state = self.state.read().await;
        Ok(state.notes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: NoteId) -> NoteResult<Option<Note>> {
        let state = self.state.read().await;
        Ok(state.notes.get(&id).cloned())
    }

    async fn create(&self, note: NewNote) -> NoteResult<Note> {
        fits_title(note.title())?;

        let mut state = self.state.write().await;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| NoteError::Storage("notes id sequence exhausted".to_string()))?;
        state.last_id = next;

        let id = NoteId::new(next);
        let note = Note::from_persistence(id, note.title().to_string(), note.content().to_string());
        state.notes.insert(id, note.clone());

        Ok(note)
    }

    async fn update(&self, id: NoteId, changes: NoteChanges) -> NoteResult<Option<Note>> {
        let mut state = self.state.write().await;
        if !state.notes.contains_key(&id) {
            return Ok(None);
        }

        let title = not_null("title", changes.title)?;
        fits_title(&title)?;
        let content = not_null("content", changes.content)?;
        let note = Note::from_persistence(id, title, content);
        state.notes.insert(id, note.clone());

        Ok(Some(note))
    }

    async fn delete(&self, id: NoteId) -> NoteResult<()> {
        let mut state = self.state.write().await;
        state.notes.remove(&id);
        Ok(())
    }
}
