// API layer module (adapters for HTTP)
// Handlers translate requests into repository calls and outcomes into responses

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
