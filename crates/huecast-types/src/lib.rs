//! Shared types and error definitions for the huecast platform.
//!
//! This crate provides the foundational types used across all huecast
//! crates: speaker roles, session-scoped utterance keys, transcript
//! segment frames and their validated form, and the extraction result
//! emitted toward the UI layer.
//!
//! No crate in the workspace depends on anything *except* `huecast-types`
//! for cross-cutting type definitions. This keeps the dependency graph
//! clean and prevents circular dependencies.

use serde::{Deserialize, Serialize};

mod segment;

pub use segment::{ExtractionResult, SegmentFrame, SessionId, TranscriptSegment, UtteranceKey};

/// The role of the participant a transcript segment is attributed to.
///
/// Transcription sources tag each utterance with the speaker that produced
/// it; downstream consumers typically act on one role only (e.g. the
/// remote agent's speech, not the local user's).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeakerRole {
    /// The local participant (the user at this endpoint).
    #[serde(rename = "LOCAL")]
    Local,
    /// The remote voice agent.
    #[serde(rename = "REMOTE_AGENT")]
    RemoteAgent,
    /// Any other participant (additional humans, observers).
    #[serde(rename = "OTHER")]
    Other,
}

impl SpeakerRole {
    /// Returns the canonical string label for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::RemoteAgent => "REMOTE_AGENT",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for SpeakerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpeakerRole {
    type Err = ParseSpeakerRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(Self::Local),
            "REMOTE_AGENT" => Ok(Self::RemoteAgent),
            "OTHER" => Ok(Self::Other),
            _ => Err(ParseSpeakerRoleError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown speaker role string.
#[derive(Debug, Clone)]
pub struct ParseSpeakerRoleError(pub String);

impl std::fmt::Display for ParseSpeakerRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown speaker role: {}", self.0)
    }
}

impl std::error::Error for ParseSpeakerRoleError {}

/// Errors produced when promoting a raw segment frame to a validated
/// transcript segment.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// The frame is structurally malformed (missing utterance id or text).
    ///
    /// Never fatal to the stream: callers log the frame and continue with
    /// the next one.
    #[error("invalid segment: {0}")]
    InvalidSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn speaker_role_labels_round_trip() {
        for role in [SpeakerRole::Local, SpeakerRole::RemoteAgent, SpeakerRole::Other] {
            assert_eq!(SpeakerRole::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn speaker_role_unknown_label_fails() {
        let err = SpeakerRole::from_str("AGENT").unwrap_err();
        assert!(err.to_string().contains("AGENT"));
    }

    #[test]
    fn speaker_role_serde_uses_canonical_labels() {
        let json = serde_json::to_string(&SpeakerRole::RemoteAgent).unwrap();
        assert_eq!(json, "\"REMOTE_AGENT\"");
        let role: SpeakerRole = serde_json::from_str("\"LOCAL\"").unwrap();
        assert_eq!(role, SpeakerRole::Local);
    }
}
