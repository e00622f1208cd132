//! Line-oriented scenario scripts.
//!
//! We want a trivial text format for exercising a session from a file or a
//! pipe, without inventing a wire protocol:
//!
//! ```text
//! # agent reads a long answer aloud
//! agent on
//! 0.95 umm
//! 0.95 stop
//! agent off
//! 0.95 umm
//! ```
//!
//! Blank lines and `#` comments are skipped. `agent on` / `agent off` toggle
//! the speaking flag. Any other line is `<confidence> <text...>`, one
//! utterance fragment per line. The CLI is responsible for mapping parsed
//! commands onto a session so the format stays reusable outside of a CLI
//! context (tests, batch replays).

use crate::error::{Error, Result};

/// One line of a scenario script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioCommand {
    /// Agent audio output started (`true`) or stopped (`false`).
    AgentSpeaking(bool),

    /// A transcribed utterance fragment with its confidence.
    Utterance { text: String, confidence: f32 },
}

/// Parse a single scenario line.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScenarioCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    match line {
        "agent on" => return Ok(Some(ScenarioCommand::AgentSpeaking(true))),
        "agent off" => return Ok(Some(ScenarioCommand::AgentSpeaking(false))),
        _ => {}
    }

    let (confidence, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let confidence: f32 = confidence
        .parse()
        .map_err(|_| Error::msg(format!("invalid confidence in scenario line: '{line}'")))?;

    Ok(Some(ScenarioCommand::Utterance {
        text: text.trim().to_string(),
        confidence,
    }))
}
