use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, notes};
use crate::api::state::AppState;

/// Builds the application router
///
/// Note routes are mounted under `prefix` (e.g. `/notes`, also reachable as
/// `/notes/`). Unknown paths and unhandled methods on known paths both
/// answer 404.
pub fn router(state: AppState, prefix: &str) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collection_slash = format!("{}/", prefix);
    let item_path = format!("{}/:id", prefix);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Note routes
        .route(prefix, get(notes::list_notes).post(notes::create_note))
        .route(
            &collection_slash,
            get(notes::list_notes).post(notes::create_note),
        )
        .route(
            &item_path,
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .fallback(notes::route_not_found)
        .method_not_allowed_fallback(notes::route_not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
