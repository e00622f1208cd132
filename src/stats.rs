//! Decision counters.
//!
//! A session can run for a long call; these counters give a cheap aggregate
//! view of how its speech was classified (how often the agent was barged in
//! on, how much filler was suppressed) without retaining per-event history.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::event::{Decision, TranscriptionEvent};
use crate::observer::DecisionObserver;

/// Counts decisions per variant.
///
/// Counters are atomic so the stats handle can be shared (for example behind
/// an `Arc` registered as a [`DecisionObserver`]) while another task reads
/// summaries.
#[derive(Debug, Default)]
pub struct DecisionStats {
    ignored: AtomicU64,
    stopped: AtomicU64,
    processed: AtomicU64,
}

/// A point-in-time view of [`DecisionStats`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DecisionSummary {
    pub ignored: u64,
    pub stopped: u64,
    pub processed: u64,
    pub total: u64,
}

impl DecisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision.
    pub fn record(&self, decision: Decision) {
        let counter = match decision {
            Decision::Ignored => &self.ignored,
            Decision::Stop => &self.stopped,
            Decision::Process => &self.processed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the current counts.
    ///
    /// Counts are read independently, so a snapshot taken while decisions are
    /// being recorded concurrently may straddle an update; each individual
    /// count is still exact.
    pub fn snapshot(&self) -> DecisionSummary {
        let ignored = self.ignored.load(Ordering::Relaxed);
        let stopped = self.stopped.load(Ordering::Relaxed);
        let processed = self.processed.load(Ordering::Relaxed);
        DecisionSummary {
            ignored,
            stopped,
            processed,
            total: ignored + stopped + processed,
        }
    }

    /// Log the current counts through the diagnostic channel.
    pub fn log_summary(&self) {
        let summary = self.snapshot();
        tracing::info!(
            ignored = summary.ignored,
            stopped = summary.stopped,
            processed = summary.processed,
            total = summary.total,
            "decision summary"
        );
    }
}

impl DecisionObserver for DecisionStats {
    fn on_decision(&self, _event: &TranscriptionEvent, decision: Decision) {
        self.record(decision);
    }
}
