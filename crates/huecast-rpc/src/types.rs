//! Wire contracts for the `set_color` remote procedure.
//!
//! The payload schema is fixed and validated at the boundary — the
//! structured path never trusts a loose JSON blob.

use serde::{Deserialize, Serialize};

/// Request body for the `set_color` procedure: `{"color": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetColorRequest {
    /// The color name the backend agent decided on.
    pub color: String,
}

/// Acknowledgement body for the `set_color` procedure: `{"ok": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcAck {
    pub ok: bool,
}
