//! Huecast server library logic.

pub mod api_rpc;
pub mod api_sse;
pub mod api_transcription;
pub mod config;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use huecast_extract::{SignalExtractor, SignalVocabulary};
use huecast_session::ConversationSession;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The conversation session driving extraction and fan-out.
    pub session: Arc<ConversationSession>,
    /// The configured vocabulary, shared with the RPC validation path.
    pub vocabulary: Arc<SignalVocabulary>,
}

impl AppState {
    /// Builds state around a freshly constructed extractor.
    pub fn new(extractor: SignalExtractor) -> Self {
        let vocabulary = Arc::new(extractor.vocabulary().clone());
        Self {
            session: Arc::new(ConversationSession::new(extractor)),
            vocabulary,
        }
    }
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load
/// balancers, monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    // The UI layer is a browser client on a different origin; the API
    // carries no credentials, so a permissive CORS policy is acceptable.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(
            "/transcription",
            post(api_transcription::post_transcription_handler),
        )
        .route("/rpc/set_color", post(api_rpc::set_color_handler))
        .route("/events/signals", get(api_sse::get_signal_stream_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
