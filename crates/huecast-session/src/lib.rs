//! Conversation session binding for the huecast platform.
//!
//! Sits between the transport layer (which delivers notification batches
//! of raw transcript frames) and the consumers of extracted signals. The
//! session validates frames at the boundary, drives the extractor under a
//! lock scoped to one segment, and fans emitted results out on a
//! broadcast channel.
//!
//! The extractor itself is synchronous and in-memory only; the lock is
//! never held across an await point or any I/O.

use std::sync::Mutex;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use huecast_extract::SignalExtractor;
use huecast_types::{ExtractionResult, SegmentFrame, SessionId, SpeakerRole};

/// Default capacity for the per-session signal broadcast channel.
const DEFAULT_SIGNAL_BROADCAST_CAPACITY: usize = 256;

/// One voice conversation's extraction pipeline.
///
/// Utterance identifiers from the transport are scoped to this session's
/// [`SessionId`], so a transport that reuses ids across connections cannot
/// bleed state between conversations.
#[derive(Debug)]
pub struct ConversationSession {
    session_id: SessionId,
    extractor: Mutex<SignalExtractor>,
    signal_tx: broadcast::Sender<ExtractionResult>,
}

impl ConversationSession {
    /// Creates a session with a freshly generated session id.
    pub fn new(extractor: SignalExtractor) -> Self {
        Self::with_session_id(SessionId::generate(), extractor)
    }

    /// Creates a session with an explicit session id.
    pub fn with_session_id(session_id: SessionId, extractor: SignalExtractor) -> Self {
        let (tx, _) = broadcast::channel(DEFAULT_SIGNAL_BROADCAST_CAPACITY);
        Self {
            session_id,
            extractor: Mutex::new(extractor),
            signal_tx: tx,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Handles one transcription notification from the transport.
    ///
    /// Each frame is validated and ingested independently; a malformed
    /// frame is logged and dropped without affecting the rest of the
    /// batch. Emissions are broadcast to subscribers in order and also
    /// returned for callers that want the synchronous view.
    pub fn handle_transcription(
        &self,
        role: SpeakerRole,
        frames: &[SegmentFrame],
    ) -> Vec<ExtractionResult> {
        let mut emitted = Vec::new();
        for frame in frames {
            let segment = match frame.validate(&self.session_id, role) {
                Ok(segment) => segment,
                Err(e) => {
                    warn!(session = %self.session_id, error = %e, "dropping malformed transcript frame");
                    continue;
                }
            };

            let emission = {
                let mut extractor = self.extractor.lock().expect("extractor lock poisoned");
                extractor.ingest(&segment)
            };

            if let Some(result) = emission {
                self.publish(result.clone());
                emitted.push(result);
            }
        }
        emitted
    }

    /// Broadcasts an extraction result to all subscribers.
    ///
    /// Also used by the structured RPC path, which produces the same
    /// result shape from a server-side decision instead of text parsing.
    /// A send with no live subscribers is not an error.
    pub fn publish(&self, result: ExtractionResult) {
        debug!(
            session = %self.session_id,
            utterance = %result.utterance_key,
            label = %result.label,
            confirmed_final = result.confirmed_final,
            "publishing signal"
        );
        let _ = self.signal_tx.send(result);
    }

    /// Subscribes to extraction results from this session.
    ///
    /// Each received value is a complete replacement of prior UI state,
    /// to be applied in receipt order.
    pub fn subscribe(&self) -> broadcast::Receiver<ExtractionResult> {
        self.signal_tx.subscribe()
    }
}
