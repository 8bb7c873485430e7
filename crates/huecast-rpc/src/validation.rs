//! Boundary validation for the `set_color` procedure.

use huecast_extract::SignalVocabulary;

use crate::error::RpcError;
use crate::types::SetColorRequest;

/// Validates a `set_color` request against the configured vocabulary.
///
/// The color goes through the same normalization as transcript tokens
/// (lowercase, alphabet filtering), so `"Blue!"` on the wire and `"blue"`
/// in the vocabulary meet at the same label.
///
/// # Errors
///
/// - [`RpcError::InvalidRequest`] when the color is empty or normalizes
///   to nothing.
/// - [`RpcError::UnknownLabel`] when the normalized color is not in the
///   vocabulary.
pub fn validate_set_color(
    request: &SetColorRequest,
    vocabulary: &SignalVocabulary,
) -> Result<String, RpcError> {
    if request.color.trim().is_empty() {
        return Err(RpcError::InvalidRequest("color is empty".to_string()));
    }

    let label = vocabulary.normalize(&request.color);
    if label.is_empty() {
        return Err(RpcError::InvalidRequest(format!(
            "color {:?} normalizes to nothing",
            request.color
        )));
    }

    if !vocabulary.contains(&label) {
        return Err(RpcError::UnknownLabel(request.color.clone()));
    }

    Ok(label)
}
