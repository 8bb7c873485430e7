//! Streaming signal extraction for the huecast platform.
//!
//! Maps an unbounded, ordered stream of transcript segments to a pruned
//! stream of classified signals (color names), emitting as early as
//! confidently possible while avoiding spurious, duplicate, or flickering
//! output as partial text is revised.
//!
//! Transcription sources emit growing-prefix or revised text for the same
//! utterance as recognition confidence improves. Naive re-matching on
//! every delta would either flicker (label found, text revised to no
//! longer contain it, found again) or double-fire on the same word. The
//! extractor instead acts on a strict prefix of the utterance: the first
//! matching token wins, an unchanged label is never re-emitted, and a
//! final segment freezes the utterance for good. No buffering of the
//! whole utterance is needed before acting.
//!
//! # Core types
//!
//! - [`SignalVocabulary`] — the immutable set of recognized labels
//! - [`TokenAlphabet`] — the character class tokens are filtered through
//! - [`SignalExtractor`] — the per-utterance state machine
//!
//! # State machine
//!
//! Per utterance: `OPEN(no label)` → `OPEN(label=L)` → `CLOSED`.
//! `CLOSED` is terminal; late or duplicate segments for a closed
//! utterance are dropped without any state mutation.

pub mod error;
pub mod extractor;
pub mod vocabulary;

pub use error::ExtractError;
pub use extractor::{ExtractorConfig, RoleFilter, SignalExtractor};
pub use vocabulary::{tokenize, SignalVocabulary, TokenAlphabet};
