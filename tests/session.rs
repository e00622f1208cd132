use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use bargein::stats::DecisionStats;
use bargein::{AgentControl, Decision, Session, TranscriptionEvent};

/// Records every runtime call the session makes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    StopOutput,
    SubmitInput(String),
}

#[derive(Default)]
struct RecordingControl {
    actions: Mutex<Vec<Action>>,
}

impl RecordingControl {
    fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentControl for RecordingControl {
    async fn stop_output(&self) {
        self.actions.lock().unwrap().push(Action::StopOutput);
    }

    async fn submit_input(&self, text: &str) {
        self.actions
            .lock()
            .unwrap()
            .push(Action::SubmitInput(text.to_string()));
    }
}

#[tokio::test]
async fn filler_while_agent_speaking_makes_no_outbound_call() {
    let session = Session::new(RecordingControl::default());
    session.on_agent_speaking_changed(true);

    let decision = session
        .on_transcription(TranscriptionEvent::new("umm", 0.95))
        .await;

    assert_eq!(decision, Decision::Ignored);
    assert!(session.control().actions().is_empty());
}

#[tokio::test]
async fn barge_in_stops_agent_output() {
    let session = Session::new(RecordingControl::default());
    session.on_agent_speaking_changed(true);

    let decision = session
        .on_transcription(TranscriptionEvent::new("stop", 0.95))
        .await;

    assert_eq!(decision, Decision::Stop);
    assert_eq!(session.control().actions(), vec![Action::StopOutput]);
}

#[tokio::test]
async fn speech_while_agent_silent_is_submitted_as_input() {
    let session = Session::new(RecordingControl::default());
    session.on_agent_speaking_changed(false);

    let decision = session
        .on_transcription(TranscriptionEvent::new("umm", 0.95))
        .await;

    assert_eq!(decision, Decision::Process);
    assert_eq!(
        session.control().actions(),
        vec![Action::SubmitInput("umm".to_string())]
    );
}

#[tokio::test]
async fn low_confidence_noise_makes_no_outbound_call() {
    let session = Session::new(RecordingControl::default());
    session.on_agent_speaking_changed(true);

    let decision = session
        .on_transcription(TranscriptionEvent::new("hmm yeah", 0.4))
        .await;

    assert_eq!(decision, Decision::Ignored);
    assert!(session.control().actions().is_empty());
}

#[tokio::test]
async fn observers_see_every_decision() {
    let stats = Arc::new(DecisionStats::new());
    let mut session = Session::new(RecordingControl::default());
    session.add_observer(stats.clone());

    session.on_agent_speaking_changed(true);
    session
        .on_transcription(TranscriptionEvent::new("umm", 0.95))
        .await;
    session
        .on_transcription(TranscriptionEvent::new("stop", 0.95))
        .await;

    session.on_agent_speaking_changed(false);
    session
        .on_transcription(TranscriptionEvent::new("what's the weather", 0.9))
        .await;

    let summary = stats.snapshot();
    assert_eq!(summary.ignored, 1);
    assert_eq!(summary.stopped, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.total, 3);
}

#[tokio::test]
async fn state_notifications_between_events_change_dispatch() {
    let session = Session::new(RecordingControl::default());

    // Mirrors a conversation: the agent answers, the user acknowledges, then
    // interrupts, then speaks freely once the agent has gone quiet.
    session.on_agent_speaking_changed(true);
    session
        .on_transcription(TranscriptionEvent::new("uh", 0.9))
        .await;
    session
        .on_transcription(TranscriptionEvent::new("wait that's wrong", 0.9))
        .await;

    session.on_agent_speaking_changed(false);
    session
        .on_transcription(TranscriptionEvent::new("try again please", 0.9))
        .await;

    assert_eq!(
        session.control().actions(),
        vec![
            Action::StopOutput,
            Action::SubmitInput("try again please".to_string()),
        ]
    );
}
