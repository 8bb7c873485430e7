//! Error types for the signal extraction core.

/// Errors that can occur when constructing an extractor.
///
/// Note what is *not* here: a segment whose text contains no vocabulary
/// token, or a segment for an unknown utterance, is normal streaming
/// input, not an error. Ingestion itself never fails — it degrades to
/// "no emission" and the stream continues.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The configured vocabulary normalized to an empty set.
    #[error("signal vocabulary is empty after normalization")]
    EmptyVocabulary,
}
