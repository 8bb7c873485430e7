//! Transcription ingest notification handler.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use huecast_types::{ExtractionResult, SegmentFrame, SpeakerRole};

use crate::AppState;

/// One notification from the transport layer: zero or more transcript
/// frames attributed to a participant role.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionNotice {
    /// Canonical role label (`LOCAL`, `REMOTE_AGENT`, `OTHER`).
    pub role: String,
    /// The transcript frames delivered by this notification.
    #[serde(default)]
    pub segments: Vec<SegmentFrame>,
}

/// Response body listing the signals this notification produced.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionResponse {
    pub results: Vec<ExtractionResult>,
}

/// Handler for `POST /transcription`.
///
/// Feeds the notification into the conversation session. Malformed
/// frames inside the batch are dropped by the session (logged, never
/// fatal); an unknown role label rejects the whole notification since
/// attribution is a precondition for every frame in it.
pub async fn post_transcription_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(notice): Json<TranscriptionNotice>,
) -> Result<Json<TranscriptionResponse>, (StatusCode, Json<Value>)> {
    let role: SpeakerRole = notice.role.parse().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("{e}") })),
        )
    })?;

    let results = state.session.handle_transcription(role, &notice.segments);
    Ok(Json(TranscriptionResponse { results }))
}
