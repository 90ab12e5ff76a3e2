use std::sync::Arc;

use crate::domain::repositories::NoteRepository;

/// Shared handler state
///
/// Holds the injected note store; cloning only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: impl NoteRepository + 'static) -> Self {
        Self {
            notes: Arc::new(notes),
        }
    }
}
