//! Transcript segment frames, validated segments, and extraction results.
//!
//! The transport layer delivers *frames*: loosely-typed updates whose
//! fields cannot be trusted. A frame is promoted to a [`TranscriptSegment`]
//! only by [`SegmentFrame::validate`], which binds it to a session and a
//! speaker role. Everything downstream of validation operates on the
//! typed form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{SegmentError, SpeakerRole};

/// Identifies one transport connection's lifetime.
///
/// Transcription sources correlate partial revisions of an utterance with
/// an opaque utterance id, but give no guarantee that ids are unique
/// *across* connections. Composing every utterance id with the session
/// that produced it keeps reused ids from bleeding state between
/// conversations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session id from an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random session id (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The key under which all per-utterance extractor state is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtteranceKey {
    /// The session the utterance belongs to.
    pub session_id: SessionId,
    /// The transport-assigned utterance identifier within that session.
    pub utterance_id: String,
}

impl UtteranceKey {
    pub fn new(session_id: SessionId, utterance_id: impl Into<String>) -> Self {
        Self {
            session_id,
            utterance_id: utterance_id.into(),
        }
    }
}

impl std::fmt::Display for UtteranceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.session_id, self.utterance_id)
    }
}

/// One raw transcription update as delivered by the transport.
///
/// A given utterance id may produce many non-final frames followed by
/// exactly one final frame, or may be finalized directly. `text` carries
/// the transcript accumulated or *replaced* so far — later frames may
/// revise earlier text rather than extend it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentFrame {
    /// Opaque identifier correlating partial revisions of one utterance.
    pub utterance_id: Option<String>,
    /// The transcript content so far for this utterance.
    pub text: Option<String>,
    /// True once the source will not revise this utterance further.
    #[serde(default)]
    pub is_final: bool,
}

impl SegmentFrame {
    /// Validates this frame into a [`TranscriptSegment`] bound to a
    /// session and speaker role.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] when the utterance id is
    /// missing or empty, or when `text` is absent.
    pub fn validate(
        &self,
        session_id: &SessionId,
        speaker_role: SpeakerRole,
    ) -> Result<TranscriptSegment, SegmentError> {
        let utterance_id = match self.utterance_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(SegmentError::InvalidSegment(
                    "missing utterance_id".to_string(),
                ))
            }
        };
        let text = self
            .text
            .clone()
            .ok_or_else(|| SegmentError::InvalidSegment("missing text".to_string()))?;

        Ok(TranscriptSegment {
            speaker_role,
            utterance_key: UtteranceKey::new(session_id.clone(), utterance_id),
            text,
            is_final: self.is_final,
        })
    }
}

/// A validated transcript update, ready for extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// The participant this segment is attributed to.
    pub speaker_role: SpeakerRole,
    /// The session-scoped utterance this segment revises.
    pub utterance_key: UtteranceKey,
    /// The transcript content accumulated or replaced so far.
    pub text: String,
    /// True once the source will not revise this utterance further.
    pub is_final: bool,
}

/// A classified signal extracted from an utterance.
///
/// Emitted at most once per transition of "current best label" per
/// utterance. Consumers treat each result as a complete replacement of
/// prior state, applied in receipt order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The utterance the label was derived from.
    pub utterance_key: UtteranceKey,
    /// The matched vocabulary label.
    pub label: String,
    /// Whether the label was derived from a final segment.
    pub confirmed_final: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionId {
        SessionId::new("sess-1")
    }

    #[test]
    fn validate_promotes_complete_frame() {
        let frame = SegmentFrame {
            utterance_id: Some("utt-1".to_string()),
            text: Some("hello".to_string()),
            is_final: true,
        };

        let segment = frame
            .validate(&session(), SpeakerRole::RemoteAgent)
            .expect("frame should validate");
        assert_eq!(segment.utterance_key.utterance_id, "utt-1");
        assert_eq!(segment.utterance_key.session_id, session());
        assert_eq!(segment.text, "hello");
        assert!(segment.is_final);
        assert_eq!(segment.speaker_role, SpeakerRole::RemoteAgent);
    }

    #[test]
    fn validate_rejects_missing_utterance_id() {
        let frame = SegmentFrame {
            utterance_id: None,
            text: Some("hello".to_string()),
            is_final: false,
        };
        let err = frame
            .validate(&session(), SpeakerRole::RemoteAgent)
            .unwrap_err();
        assert!(err.to_string().contains("utterance_id"));
    }

    #[test]
    fn validate_rejects_empty_utterance_id() {
        let frame = SegmentFrame {
            utterance_id: Some(String::new()),
            text: Some("hello".to_string()),
            is_final: false,
        };
        assert!(frame
            .validate(&session(), SpeakerRole::RemoteAgent)
            .is_err());
    }

    #[test]
    fn validate_rejects_missing_text() {
        let frame = SegmentFrame {
            utterance_id: Some("utt-1".to_string()),
            text: None,
            is_final: false,
        };
        let err = frame
            .validate(&session(), SpeakerRole::RemoteAgent)
            .unwrap_err();
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn frame_deserializes_with_defaults() {
        let frame: SegmentFrame =
            serde_json::from_str(r#"{"utterance_id": "u", "text": "t"}"#).unwrap();
        assert!(!frame.is_final);
    }

    #[test]
    fn utterance_keys_differ_across_sessions() {
        let a = UtteranceKey::new(SessionId::new("sess-a"), "utt-1");
        let b = UtteranceKey::new(SessionId::new("sess-b"), "utt-1");
        assert_ne!(a, b);
    }

    #[test]
    fn generated_session_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn extraction_result_serializes_flat() {
        let result = ExtractionResult {
            utterance_key: UtteranceKey::new(session(), "utt-9"),
            label: "blue".to_string(),
            confirmed_final: true,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["label"], "blue");
        assert_eq!(value["confirmed_final"], true);
        assert_eq!(value["utterance_key"]["session_id"], "sess-1");
        assert_eq!(value["utterance_key"]["utterance_id"], "utt-9");
    }
}
