//! The interruption classifier.
//!
//! We expose a single decision operation consumed once per transcription
//! event. The intent is:
//! - The classifier holds only the agent-speaking flag and the filler lexicon.
//! - `decide` is a pure function of (flag, text, confidence, lexicon); no
//!   hidden history is retained between calls.
//! - The flag is mutated solely by explicit notifications from the runtime
//!   when agent output starts or stops.
//!
//! This module is deliberately free of any runtime or session types so it can
//! be embedded in any context and instantiated once per concurrent session.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::event::Decision;
use crate::lexicon::FillerLexicon;

/// Minimum transcription confidence for speech to count as an interruption
/// while the agent is talking.
///
/// Compared with strict `<`: a fragment at exactly this confidence passes.
/// Confidence is never range-validated, so out-of-range values from a
/// misbehaving caller degrade to the nearest branch rather than erroring.
pub const MIN_INTERRUPT_CONFIDENCE: f32 = 0.6;

/// Classifies transcribed user speech while a voice agent may be talking.
///
/// Typical usage:
/// - Construct once per session (optionally with a custom [`FillerLexicon`]).
/// - Forward agent start/stop notifications to [`set_agent_speaking`](Self::set_agent_speaking).
/// - Call [`decide`](Self::decide) once per transcription fragment.
///
/// All methods take `&self`; the speaking flag is atomic so state
/// notifications may race in-flight decisions without a lock. A decision
/// observes the latest flag value at the moment it reads it.
#[derive(Debug)]
pub struct InterruptClassifier {
    lexicon: FillerLexicon,
    agent_speaking: AtomicBool,
}

impl Default for InterruptClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptClassifier {
    /// Create a classifier with the default filler lexicon.
    ///
    /// The agent is considered silent until the first notification arrives.
    pub fn new() -> Self {
        Self::with_lexicon(FillerLexicon::default())
    }

    /// Create a classifier with a custom filler lexicon.
    pub fn with_lexicon(lexicon: FillerLexicon) -> Self {
        Self {
            lexicon,
            agent_speaking: AtomicBool::new(false),
        }
    }

    /// Record whether the agent is currently producing audio output.
    ///
    /// Call this on every transition of agent output. Setting the same value
    /// twice is harmless; the flag is a plain overwrite, not a toggle.
    pub fn set_agent_speaking(&self, speaking: bool) {
        // Standalone flag with no ordering dependencies on other data.
        self.agent_speaking.store(speaking, Ordering::Relaxed);
    }

    /// Whether the agent was speaking as of the last notification.
    pub fn is_agent_speaking(&self) -> bool {
        self.agent_speaking.load(Ordering::Relaxed)
    }

    /// Whether `text` consists entirely of filler tokens.
    ///
    /// Empty or whitespace-only text is never filler; it falls through to the
    /// confidence path in [`decide`](Self::decide).
    pub fn is_filler(&self, text: &str) -> bool {
        self.lexicon.matches(text)
    }

    /// Access the configured filler lexicon.
    pub fn lexicon(&self) -> &FillerLexicon {
        &self.lexicon
    }

    /// Replace the filler lexicon.
    ///
    /// Requires exclusive access; the lexicon is immutable from the shared
    /// decision/notification paths.
    pub fn set_lexicon(&mut self, lexicon: FillerLexicon) {
        self.lexicon = lexicon;
    }

    /// Map one transcription fragment to a [`Decision`].
    ///
    /// While the agent is silent, any speech is genuine user input and yields
    /// [`Decision::Process`] regardless of content or confidence. While the
    /// agent is speaking:
    /// - fragments below [`MIN_INTERRUPT_CONFIDENCE`] are presumed noise or
    ///   bleed-through and are ignored (checked before filler analysis, so a
    ///   quiet "umm" reports as low-confidence, not filler);
    /// - filler-only fragments are ignored;
    /// - anything else is a barge-in and yields [`Decision::Stop`].
    ///
    /// Note: empty text is never filler, so a sufficiently confident empty
    /// fragment during agent speech stops the agent. Decisions are logged as
    /// a diagnostic side channel; the returned value is the only output.
    pub fn decide(&self, text: &str, confidence: f32) -> Decision {
        if !self.agent_speaking.load(Ordering::Relaxed) {
            tracing::debug!(text, confidence, "user speech while agent silent");
            return Decision::Process;
        }

        if confidence < MIN_INTERRUPT_CONFIDENCE {
            tracing::debug!(text, confidence, "low-confidence speech during agent output");
            return Decision::Ignored;
        }

        if self.is_filler(text) {
            tracing::debug!(text, confidence, "filler speech during agent output");
            return Decision::Ignored;
        }

        tracing::info!(text, confidence, "barge-in detected, stopping agent output");
        Decision::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_filler_delegates_to_lexicon() {
        let classifier = InterruptClassifier::new();
        assert!(classifier.is_filler("umm uh"));
        assert!(!classifier.is_filler("umm stop"));
        assert!(!classifier.is_filler(""));
    }

    #[test]
    fn replacing_the_lexicon_changes_filler_matching() {
        let mut classifier = InterruptClassifier::new();
        assert!(!classifier.is_filler("righto"));

        classifier.set_lexicon(FillerLexicon::new(["righto"]));
        assert!(classifier.is_filler("righto"));
        assert!(!classifier.is_filler("umm"));
    }
}
