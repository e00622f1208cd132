//! Observer hook for classification outcomes.
//!
//! Observers receive every (event, decision) pair a session produces, without
//! modifying the dispatch path. This keeps decision output as a typed value:
//! hosts and tests can count or assert on outcomes directly instead of
//! scraping log output.

use crate::event::{Decision, TranscriptionEvent};

/// Receives every classification outcome from a session.
///
/// Implementations must be cheap and non-blocking; they run inline on the
/// transcription path before the decision is dispatched.
pub trait DecisionObserver: Send + Sync {
    fn on_decision(&self, event: &TranscriptionEvent, decision: Decision);
}
