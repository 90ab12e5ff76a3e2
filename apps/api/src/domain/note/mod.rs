// Note domain module
// Contains the note entity, its input shapes, identifier and error taxonomy

#![allow(clippy::module_inception)]

pub mod errors;
pub mod note;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{NoteError, NoteResult};
pub use note::{NewNote, Note, NoteChanges};
pub use value_objects::NoteId;
