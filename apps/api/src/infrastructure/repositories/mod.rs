// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_note_repository;
pub mod postgres_note_repository;

pub use in_memory_note_repository::InMemoryNoteRepository;
pub use postgres_note_repository::PostgresNoteRepository;
