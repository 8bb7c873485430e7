//! Signal vocabulary and token normalization.
//!
//! Matching is exact-token, case-insensitive: segment text is lowercased,
//! split on whitespace runs, and each token is stripped of characters
//! outside the configured alphabet before lookup. Vocabulary labels go
//! through the same normalization at construction time, so `"Blue!"` in a
//! config file and `"BLUE"` in a transcript meet at `"blue"`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// The character class tokens are filtered through before matching.
///
/// Characters outside the alphabet are stripped from each token (after
/// lowercasing), so `"blue!"` and `"blue"` are the same token under the
/// default alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAlphabet {
    /// Keep lowercase ASCII letters only. The right choice for word-like
    /// vocabularies such as color names.
    #[default]
    Alphabetic,
    /// Keep lowercase ASCII letters and digits.
    Alphanumeric,
    /// Keep exactly the characters in the given set.
    Chars(String),
}

impl TokenAlphabet {
    /// Whether a (already lowercased) character survives filtering.
    pub fn keeps(&self, c: char) -> bool {
        match self {
            Self::Alphabetic => c.is_ascii_lowercase(),
            Self::Alphanumeric => c.is_ascii_lowercase() || c.is_ascii_digit(),
            Self::Chars(set) => set.contains(c),
        }
    }

    /// Lowercases `raw` and strips characters outside the alphabet.
    pub fn normalize(&self, raw: &str) -> String {
        raw.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| self.keeps(*c))
            .collect()
    }
}

/// Splits `text` into normalized tokens, left to right.
///
/// Tokens that normalize to the empty string (e.g. pure punctuation) are
/// dropped.
pub fn tokenize<'a>(
    text: &'a str,
    alphabet: &'a TokenAlphabet,
) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace()
        .map(|word| alphabet.normalize(word))
        .filter(|token| !token.is_empty())
}

/// An immutable set of recognized signal labels.
///
/// Owned by the extractor at configuration time; labels are normalized
/// through the vocabulary's alphabet at construction so lookups are a
/// plain set membership test on normalized tokens.
#[derive(Debug, Clone)]
pub struct SignalVocabulary {
    labels: HashSet<String>,
    alphabet: TokenAlphabet,
}

impl SignalVocabulary {
    /// Builds a vocabulary from raw labels and an alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::EmptyVocabulary`] when no label survives
    /// normalization.
    pub fn new<I, S>(labels: I, alphabet: TokenAlphabet) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: HashSet<String> = labels
            .into_iter()
            .map(|label| alphabet.normalize(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(ExtractError::EmptyVocabulary);
        }

        Ok(Self { labels, alphabet })
    }

    /// Whether an already-normalized token is a recognized label.
    pub fn contains(&self, token: &str) -> bool {
        self.labels.contains(token)
    }

    /// Normalizes a raw label through this vocabulary's alphabet.
    pub fn normalize(&self, raw: &str) -> String {
        self.alphabet.normalize(raw)
    }

    /// The alphabet this vocabulary was built with.
    pub fn alphabet(&self) -> &TokenAlphabet {
        &self.alphabet
    }

    /// Number of recognized labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
