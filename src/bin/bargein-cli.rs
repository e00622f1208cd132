use std::io::{self, BufRead, BufWriter, Write};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use serde::Serialize;

use bargein::lexicon::FillerLexicon;
use bargein::scenario::{ScenarioCommand, parse_line};
use bargein::stats::DecisionStats;
use bargein::{AgentControl, Decision, InterruptClassifier, Session, TranscriptionEvent};

/// A stand-in for the real voice-agent runtime.
///
/// The CLI has no agent to halt or prompt, so control actions are only
/// logged. Swap this for a real `AgentControl` implementation to wire the
/// classifier into an actual agent stack.
struct RuntimeStub;

#[async_trait]
impl AgentControl for RuntimeStub {
    async fn stop_output(&self) {
        tracing::info!("halting agent output");
    }

    async fn submit_input(&self, text: &str) {
        tracing::info!(text, "submitting user input");
    }
}

#[derive(Serialize)]
struct DecisionRecord<'a> {
    text: &'a str,
    confidence: f32,
    decision: Decision,
}

#[tokio::main]
async fn main() -> Result<()> {
    bargein::logging::init();
    let params = get_params()?;

    let classifier = match &params.filler_words {
        Some(words) => InterruptClassifier::with_lexicon(FillerLexicon::new(
            words.split(',').map(str::trim),
        )),
        None => InterruptClassifier::new(),
    };

    let stats = Arc::new(DecisionStats::new());
    let mut session = Session::with_classifier(RuntimeStub, classifier);
    session.add_observer(stats.clone());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_line(&line)? else {
            continue;
        };

        match cmd {
            ScenarioCommand::AgentSpeaking(speaking) => {
                session.on_agent_speaking_changed(speaking);
            }
            ScenarioCommand::Utterance { text, confidence } => {
                let decision = session
                    .on_transcription(TranscriptionEvent::new(text.clone(), confidence))
                    .await;

                let record = DecisionRecord {
                    text: &text,
                    confidence,
                    decision,
                };
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                // Flush so streaming consumers (pipes, other processes) see output promptly.
                writer.flush()?;
            }
        }
    }

    stats.log_summary();
    if params.summary {
        serde_json::to_writer(&mut writer, &stats.snapshot())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "bargein")]
#[command(about = "Replay a barge-in scenario from stdin")]
struct Params {
    /// Comma-separated filler words to use instead of the built-in set.
    #[arg(short = 'f', long = "filler-words")]
    pub filler_words: Option<String>,

    /// Append a JSON decision summary after the scenario ends.
    #[arg(long = "summary", default_value_t = false)]
    pub summary: bool,
}

fn get_params() -> Result<Params> {
    Ok(Params::parse())
}
