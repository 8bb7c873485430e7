//! Error types for the structured RPC path.

/// Errors that can occur during an RPC color update.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The request is structurally invalid (e.g. an empty color).
    #[error("rpc invalid request: {0}")]
    InvalidRequest(String),

    /// The color is well-formed but not in the configured vocabulary.
    #[error("rpc unknown label: {0}")]
    UnknownLabel(String),

    /// The round trip failed at the transport level.
    #[error("rpc transport error: {0}")]
    Transport(String),

    /// The remote end answered with a non-success status.
    #[error("rpc call failed with status {0}")]
    Status(u16),
}
