//! Session-level dispatch of classification decisions.
//!
//! The classifier answers "is this a real interruption?"; this module acts on
//! the answer. A [`Session`] wires one [`InterruptClassifier`] to the two
//! operations a voice-agent runtime must expose:
//! - halting the agent's current audio output
//! - submitting recognized speech as new conversational input
//!
//! The runtime side is a trait so the library never depends on any concrete
//! agent stack; tests drive a recording stub, production wires the real
//! thing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::classifier::InterruptClassifier;
use crate::event::{Decision, TranscriptionEvent};
use crate::observer::DecisionObserver;

/// Control surface a voice-agent runtime exposes to the session.
///
/// Both operations are fire-and-forget: the session consumes no return value
/// and performs no retries or cancellation. Downstream failure handling
/// belongs to the runtime.
#[async_trait]
pub trait AgentControl: Send + Sync {
    /// Halt the agent's current audio output.
    async fn stop_output(&self);

    /// Submit recognized user speech as new conversational input.
    async fn submit_input(&self, text: &str);
}

/// Dispatches transcription events through a classifier to a runtime.
///
/// Typical usage:
/// - Construct once per conversation with the runtime's control handle.
/// - Forward agent-state notifications to
///   [`on_agent_speaking_changed`](Self::on_agent_speaking_changed).
/// - Call [`on_transcription`](Self::on_transcription) once per fragment.
///
/// Observers registered with [`add_observer`](Self::add_observer) see every
/// (event, decision) pair before the decision is dispatched.
pub struct Session<C: AgentControl> {
    classifier: InterruptClassifier,
    control: C,
    observers: Vec<Arc<dyn DecisionObserver>>,
}

impl<C: AgentControl> Session<C> {
    /// Create a session with a default classifier.
    pub fn new(control: C) -> Self {
        Self::with_classifier(control, InterruptClassifier::new())
    }

    /// Create a session around a pre-configured classifier.
    pub fn with_classifier(control: C, classifier: InterruptClassifier) -> Self {
        Self {
            classifier,
            control,
            observers: Vec::new(),
        }
    }

    /// Register an observer for classification outcomes.
    pub fn add_observer(&mut self, observer: Arc<dyn DecisionObserver>) {
        self.observers.push(observer);
    }

    /// Access the session's classifier.
    pub fn classifier(&self) -> &InterruptClassifier {
        &self.classifier
    }

    /// Access the runtime control handle.
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Agent-lifecycle notification: agent audio output started or stopped.
    pub fn on_agent_speaking_changed(&self, speaking: bool) {
        self.classifier.set_agent_speaking(speaking);
    }

    /// Handle one transcription event end to end.
    ///
    /// Classifies the event, notifies observers, then dispatches:
    /// [`Decision::Stop`] halts agent output, [`Decision::Process`] submits
    /// the text as new input, [`Decision::Ignored`] makes no outbound call.
    /// Returns the decision so callers can layer their own handling on top.
    pub async fn on_transcription(&self, event: TranscriptionEvent) -> Decision {
        let decision = self.classifier.decide(&event.text, event.confidence);

        for observer in &self.observers {
            observer.on_decision(&event, decision);
        }

        match decision {
            Decision::Ignored => {}
            Decision::Stop => self.control.stop_output().await,
            Decision::Process => self.control.submit_input(&event.text).await,
        }

        decision
    }
}
