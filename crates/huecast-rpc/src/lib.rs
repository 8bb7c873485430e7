//! Structured RPC path for the huecast platform.
//!
//! The alternative to client-side transcript parsing: a backend agent
//! decides on a color and delivers it through a named remote procedure
//! (`set_color`) with a fixed JSON schema. The server turns an accepted
//! call into the same extraction-result shape the streaming extractor
//! produces, so UI consumers see one signal stream regardless of which
//! path produced it.
//!
//! # Core pieces
//!
//! - [`SetColorRequest`] / [`RpcAck`] — the wire contract
//! - [`validate_set_color`] — boundary validation against the vocabulary
//! - [`RpcClient`] — the client side of the round trip

pub mod client;
pub mod error;
pub mod types;
pub mod validation;

pub use client::RpcClient;
pub use error::RpcError;
pub use types::{RpcAck, SetColorRequest};
pub use validation::validate_set_color;
