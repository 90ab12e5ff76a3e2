use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::handlers::notes::NoteRequest;

/// Lenient JSON body extractor for note payloads
///
/// A request without a JSON content type, or with a blank body, yields an
/// empty `NoteRequest` so the handler applies its own presence rules.
/// A JSON body that fails to parse is still rejected.
pub struct NoteBody(pub NoteRequest);

#[async_trait]
impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(NoteBody(NoteRequest::default()));
        }

        let Json(payload) = Json::<NoteRequest>::from_bytes(&bytes)?;
        Ok(NoteBody(payload))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}
