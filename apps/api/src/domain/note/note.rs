use super::errors::{NoteError, NoteResult};
use super::value_objects::NoteId;

/// A persisted note
///
/// # Invariants
/// - `id` is assigned by the store and never changes
/// - `title` and `content` are never null once persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
}

impl Note {
    /// Reconstructs a note from storage
    ///
    /// Only repositories should call this; the store is the sole source of ids.
    pub fn from_persistence(id: NoteId, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Validated input for creating a note
///
/// # Example
/// ```
/// use notes_api::domain::note::NewNote;
///
/// let note = NewNote::new(Some("Test Note".into()), Some("Body".into()))
///     .expect("both fields present");
/// assert_eq!(note.title(), "Test Note");
///
/// assert!(NewNote::new(None, Some("Body".into())).is_err());
/// assert!(NewNote::new(Some(String::new()), Some("Body".into())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    /// Creates validated note input
    ///
    /// # Returns
    /// * `Ok(NewNote)` - Both fields present and non-empty
    /// * `Err(NoteError::MissingFields)` - Either field absent or empty
    pub fn new(title: Option<String>, content: Option<String>) -> NoteResult<Self> {
        match (non_empty(title), non_empty(content)) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(NoteError::MissingFields),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Replacement values for an existing note
///
/// Not validated: absent fields are handed to the store as-is and the
/// store's NOT NULL constraints decide the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
