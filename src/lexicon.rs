//! The filler-word lexicon.
//!
//! Short acknowledgment and hesitation sounds ("uh", "hmm") routinely leak
//! through speech recognition while an agent is talking. The lexicon is the
//! single configuration knob of this crate: the set of tokens we treat as
//! non-substantive when deciding whether user speech is a real interruption.

use std::collections::HashSet;

/// Tokens treated as non-substantive speech when no custom list is supplied.
pub const DEFAULT_FILLER_WORDS: &[&str] = &["uh", "umm", "hmm", "haan"];

/// A set of normalized (lower-cased) filler tokens.
///
/// Membership is checked per whitespace-separated token, so lookup stays O(1)
/// regardless of list size. Entries are lower-cased on construction; callers
/// may pass tokens in any case.
#[derive(Debug, Clone)]
pub struct FillerLexicon {
    words: HashSet<String>,
}

impl Default for FillerLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_FILLER_WORDS.iter().copied())
    }
}

impl FillerLexicon {
    /// Build a lexicon from an ordered list of tokens.
    ///
    /// Duplicates collapse; order is irrelevant to matching.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|w| w.into().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Whether a single normalized token is a filler word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.trim().to_lowercase())
    }

    /// Whether `text` consists entirely of filler tokens.
    ///
    /// The text is trimmed, lower-cased, and split on whitespace. Returns
    /// `true` iff the resulting token sequence is non-empty and every token is
    /// in the lexicon. Empty or whitespace-only text is never filler.
    pub fn matches(&self, text: &str) -> bool {
        let clean = text.trim().to_lowercase();
        if clean.is_empty() {
            return false;
        }
        clean.split_whitespace().all(|w| self.words.contains(w))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
