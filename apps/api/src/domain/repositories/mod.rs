// Repository traits (ports)
// Implementations live in the infrastructure layer

pub mod note_repository;

pub use note_repository::NoteRepository;
