//! SSE signal stream handler.

use crate::AppState;
use axum::{
    extract::Extension,
    response::{sse::Event, Sse},
};
use futures_util::Stream;
use std::{convert::Infallible, sync::Arc};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Handler for `GET /events/signals`.
///
/// Streams extraction results to the UI layer in real time. Each event
/// is a complete replacement of prior state, applied in receipt order.
pub async fn get_signal_stream_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.session.subscribe();
    let stream = BroadcastStream::new(rx);

    let mapped_stream = stream.filter_map(|result| {
        match result {
            Ok(signal) => {
                // Serialize result to JSON
                match serde_json::to_string(&signal) {
                    Ok(data) => Some(Ok(Event::default().data(data))),
                    Err(e) => {
                        tracing::error!("failed to serialize extraction result: {}", e);
                        None
                    }
                }
            }
            Err(broadcast_error) => {
                tracing::warn!(
                    error = %broadcast_error,
                    "signal SSE stream lagged or closed; events were dropped for this subscriber"
                );
                None
            }
        }
    });

    Sse::new(mapped_stream).keep_alive(axum::response::sse::KeepAlive::default())
}
