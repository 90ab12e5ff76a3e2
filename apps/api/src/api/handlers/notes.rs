use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extractors::NoteBody;
use crate::api::state::AppState;
use crate::domain::note::{NewNote, Note, NoteChanges, NoteError, NoteId};

/// Request body for creating or updating a note
///
/// Fields are optional so that absence reaches the handler instead of
/// failing extraction; a missing or non-JSON body reads as all-absent.
#[derive(Debug, Default, Deserialize)]
pub struct NoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Note as returned over HTTP
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().value(),
            title: note.title().to_string(),
            content: note.content().to_string(),
        }
    }
}

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new note
///
/// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    NoteBody(req): NoteBody,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    // Validate before touching the store
    let new_note = NewNote::new(req.title, req.content)?;

    let note = state.notes.create(new_note).await?;
    tracing::info!(note_id = %note.id(), "note created");

    Ok((StatusCode::CREATED, Json(NoteResponse::from(&note))))
}

/// List all notes
///
/// GET /notes
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = state.notes.list().await?;
    let responses = notes.iter().map(NoteResponse::from).collect();

    Ok(Json(responses))
}

/// Get a note by ID
///
/// GET /notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, ApiError> {
    let id: NoteId = id.parse()?;
    let note = state
        .notes
        .find_by_id(id)
        .await?
        .ok_or(NoteError::NotFound)?;

    Ok(Json(NoteResponse::from(&note)))
}

/// Replace title and content of a note
///
/// PUT /notes/:id
///
/// Fields are passed through unvalidated; a body missing either field fails
/// in the store and surfaces as a 500.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    NoteBody(req): NoteBody,
) -> Result<Json<NoteResponse>, ApiError> {
    let id: NoteId = id.parse()?;

    let note = state
        .notes
        .update(id, NoteChanges::new(req.title, req.content))
        .await?
        .ok_or(NoteError::NotFound)?;
    tracing::info!(note_id = %id, "note updated");

    Ok(Json(NoteResponse::from(&note)))
}

/// Delete a note
///
/// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: NoteId = id.parse()?;

    // The repository does not report whether a row matched
    if state.notes.find_by_id(id).await?.is_none() {
        return Err(NoteError::NotFound.into());
    }

    state.notes.delete(id).await?;
    tracing::info!(note_id = %id, "note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
