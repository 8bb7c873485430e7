//! The `set_color` remote procedure handler.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use huecast_rpc::{validate_set_color, RpcAck, RpcError, SetColorRequest};
use huecast_types::{ExtractionResult, UtteranceKey};

use crate::AppState;

/// Handler for `POST /rpc/set_color`.
///
/// The structured alternative to transcript parsing: the backend agent
/// decided on a color server-side and delivers it as a typed call. An
/// accepted call is published on the same signal stream the extractor
/// feeds, as a `confirmed_final` result under a fresh utterance key.
pub async fn set_color_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<SetColorRequest>,
) -> Result<Json<RpcAck>, (StatusCode, Json<Value>)> {
    let label = validate_set_color(&request, &state.vocabulary).map_err(|e| {
        let status = match e {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::UnknownLabel(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RpcError::Transport(_) | RpcError::Status(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": e.to_string() })))
    })?;

    let result = ExtractionResult {
        utterance_key: UtteranceKey::new(
            state.session.session_id().clone(),
            format!("rpc-{}", Uuid::new_v4()),
        ),
        label,
        confirmed_final: true,
    };
    state.session.publish(result);

    Ok(Json(RpcAck { ok: true }))
}
