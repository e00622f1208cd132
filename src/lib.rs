//! `bargein` — a small, focused barge-in classifier for voice agents.
//!
//! This crate provides:
//! - Filler-aware classification of transcribed user speech into ignore /
//!   stop-the-agent / process-as-input decisions
//! - A session dispatcher that maps decisions onto an abstract runtime
//!   control surface
//! - Observability hooks and decision counters
//! - A line-oriented scenario format for exercising a classifier
//!
//! The library is designed to sit next to a voice-agent runtime (which owns
//! speech recognition, TTS, and turn detection) and answer exactly one
//! question per transcription fragment: is this a real interruption?

// High-level API (most consumers should start here).
pub mod classifier;
pub mod session;

// Core value types.
pub mod event;
pub mod lexicon;

// Observability hooks and decision counters.
pub mod observer;
pub mod stats;

// Scenario scripts for driving a session from a text stream.
pub mod scenario;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use classifier::InterruptClassifier;
pub use error::{Error, Result};
pub use event::{Decision, TranscriptionEvent};
pub use lexicon::FillerLexicon;
pub use session::{AgentControl, Session};
