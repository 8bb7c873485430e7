//! The per-utterance extraction state machine.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use huecast_types::{ExtractionResult, SpeakerRole, TranscriptSegment, UtteranceKey};

use crate::error::ExtractError;
use crate::vocabulary::{tokenize, SignalVocabulary, TokenAlphabet};

/// Default bound on the closed-utterance tracking set.
const DEFAULT_CLOSED_CAPACITY: usize = 256;

/// Which speaker roles the extractor acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleFilter {
    /// Accept segments from every participant.
    Any,
    /// Accept segments from one role only.
    Only(SpeakerRole),
}

impl Default for RoleFilter {
    fn default() -> Self {
        Self::Only(SpeakerRole::RemoteAgent)
    }
}

impl RoleFilter {
    /// Whether a segment with this speaker role is of interest.
    pub fn accepts(self, role: SpeakerRole) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => role == wanted,
        }
    }
}

/// Configuration for a [`SignalExtractor`].
///
/// The recognized options, and nothing else: the vocabulary, the role
/// filter, the token alphabet, and the closed-set bound.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    /// Raw vocabulary labels; normalized through `alphabet` at build time.
    #[serde(default)]
    pub vocabulary: Vec<String>,

    /// Which speaker roles to act on.
    #[serde(default)]
    pub role_filter: RoleFilter,

    /// The character class tokens are filtered through.
    #[serde(default)]
    pub alphabet: TokenAlphabet,

    /// How many closed utterances to remember for late-delivery dropping.
    #[serde(default = "default_closed_capacity")]
    pub closed_capacity: usize,
}

fn default_closed_capacity() -> usize {
    DEFAULT_CLOSED_CAPACITY
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vec::new(),
            role_filter: RoleFilter::default(),
            alphabet: TokenAlphabet::default(),
            closed_capacity: default_closed_capacity(),
        }
    }
}

/// Bounded FIFO set of closed utterance keys.
///
/// Utterances close at `is_final` and must never re-emit afterwards, even
/// under late or duplicate delivery. The set is bounded so a long-lived
/// session cannot grow it without limit; when full, the oldest closure is
/// forgotten first.
#[derive(Debug)]
struct ClosedSet {
    order: VecDeque<UtteranceKey>,
    members: HashSet<UtteranceKey>,
    capacity: usize,
}

impl ClosedSet {
    fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            members: HashSet::new(),
            // A zero capacity would make closure unenforceable.
            capacity: capacity.max(1),
        }
    }

    fn contains(&self, key: &UtteranceKey) -> bool {
        self.members.contains(key)
    }

    fn insert(&mut self, key: UtteranceKey) {
        if self.members.contains(&key) {
            return;
        }
        while self.order.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.members.remove(&evicted);
            }
        }
        self.order.push_back(key.clone());
        self.members.insert(key);
    }
}

/// The streaming signal extractor.
///
/// Consumes an ordered stream of [`TranscriptSegment`]s and emits at most
/// one [`ExtractionResult`] per "current best label" transition per
/// utterance. [`ingest`](Self::ingest) is synchronous and performs only
/// in-memory string operations; it never blocks and holds no I/O.
#[derive(Debug)]
pub struct SignalExtractor {
    vocabulary: SignalVocabulary,
    role_filter: RoleFilter,
    /// Last emitted label per open utterance. Utterances that have not
    /// produced a label yet carry no entry; absence and `OPEN(no label)`
    /// are the same state.
    last_emitted: HashMap<UtteranceKey, String>,
    closed: ClosedSet,
}

impl SignalExtractor {
    /// Builds an extractor from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::EmptyVocabulary`] when the configured
    /// vocabulary normalizes to nothing.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let vocabulary = SignalVocabulary::new(&config.vocabulary, config.alphabet)?;
        Ok(Self {
            vocabulary,
            role_filter: config.role_filter,
            last_emitted: HashMap::new(),
            closed: ClosedSet::new(config.closed_capacity),
        })
    }

    /// The vocabulary this extractor matches against.
    pub fn vocabulary(&self) -> &SignalVocabulary {
        &self.vocabulary
    }

    /// Processes one transcript segment.
    ///
    /// Emission policy:
    /// - segments outside the role filter are ignored;
    /// - segments for a closed utterance are dropped;
    /// - the first token matching the vocabulary is the candidate label;
    /// - a candidate equal to the last emitted label for the utterance is
    ///   not re-emitted;
    /// - a final segment closes the utterance after processing, whether or
    ///   not a label was found.
    pub fn ingest(&mut self, segment: &TranscriptSegment) -> Option<ExtractionResult> {
        if !self.role_filter.accepts(segment.speaker_role) {
            return None;
        }

        let key = &segment.utterance_key;
        if self.closed.contains(key) {
            tracing::trace!(utterance = %key, "dropping segment for closed utterance");
            return None;
        }

        let candidate = tokenize(&segment.text, self.vocabulary.alphabet())
            .find(|token| self.vocabulary.contains(token));

        let mut emission = None;
        if let Some(label) = candidate {
            if self.last_emitted.get(key).map(String::as_str) != Some(label.as_str()) {
                self.last_emitted.insert(key.clone(), label.clone());
                tracing::debug!(utterance = %key, %label, is_final = segment.is_final, "signal extracted");
                emission = Some(ExtractionResult {
                    utterance_key: key.clone(),
                    label,
                    confirmed_final: segment.is_final,
                });
            }
        }

        if segment.is_final {
            self.last_emitted.remove(key);
            self.closed.insert(key.clone());
        }

        emission
    }
}
