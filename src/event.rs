use serde::Serialize;

/// A single transcribed fragment of user speech.
///
/// Events arrive from the surrounding runtime once per recognized utterance
/// fragment. `confidence` is caller-supplied and never range-validated; it is
/// only ever compared against a threshold.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionEvent {
    pub text: String,
    pub confidence: f32,
}

impl TranscriptionEvent {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// The classifier's verdict for one transcription event.
///
/// Decisions are stateless with respect to prior events: no history is
/// retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The fragment is noise or an acknowledgment sound; do nothing.
    Ignored,

    /// The fragment is a genuine barge-in; halt current agent output.
    Stop,

    /// The fragment is regular user speech; submit it as new input.
    Process,
}
