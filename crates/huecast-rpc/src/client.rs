//! HTTP client for the `set_color` remote procedure.

use tracing::debug;

use crate::error::RpcError;
use crate::types::{RpcAck, SetColorRequest};

/// Client side of the structured path: performs the `set_color` round
/// trip against a huecast server.
///
/// This is the alternative to client-side transcript parsing — the
/// backend agent makes the color decision and delivers it as a typed
/// call, at the cost of a request/response round trip.
#[derive(Debug, Clone)]
pub struct RpcClient {
    base_url: String,
    http: reqwest::Client,
}

impl RpcClient {
    /// Creates a client for the server at `base_url` (scheme and
    /// authority, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Invokes `set_color` with the given color name.
    pub async fn set_color(&self, color: &str) -> Result<RpcAck, RpcError> {
        let url = format!("{}/rpc/set_color", self.base_url.trim_end_matches('/'));
        debug!(%url, %color, "invoking set_color");

        let response = self
            .http
            .post(&url)
            .json(&SetColorRequest {
                color: color.to_string(),
            })
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status.as_u16()));
        }

        response
            .json::<RpcAck>()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))
    }
}
