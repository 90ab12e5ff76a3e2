use thiserror::Error;

/// Outcome taxonomy for every note operation
///
/// Handlers map each variant to exactly one HTTP status, so adding a variant
/// forces the mapping in `api::errors` to be revisited.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Required field absent or empty on create
    #[error("Title and content required")]
    MissingFields,

    /// No note carries the requested id
    #[error("Note not found")]
    NotFound,

    /// Path identifier is not an integer
    #[error("invalid note id: {0}")]
    InvalidId(String),

    /// Any failure raised by the backing store
    #[error("storage failure: {0}")]
    Storage(String),
}

pub type NoteResult<T> = Result<T, NoteError>;
