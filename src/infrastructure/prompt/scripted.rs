//! Scripted prompter for tests and non-interactive runs
//!
//! Answers are consumed in order; every prompt and message is recorded so
//! tests can assert on what the user would have seen. Clones share the same
//! answer queue and transcript.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::ports::Prompter;

/// One line of prompter traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptLine {
    Prompt(String),
    Say(String),
    Warn(String),
}

#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<String>>>,
    transcript: Arc<Mutex<Vec<TranscriptLine>>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn transcript(&self) -> Vec<TranscriptLine> {
        self.transcript.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Everything passed to `say`.
    pub fn said(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|line| match line {
                TranscriptLine::Say(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Everything passed to `warn`.
    pub fn warnings(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|line| match line {
                TranscriptLine::Warn(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.transcript()
            .into_iter()
            .filter_map(|line| match line {
                TranscriptLine::Prompt(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }

    fn record(&self, line: TranscriptLine) {
        if let Ok(mut transcript) = self.transcript.lock() {
            transcript.push(line);
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str) -> Option<String> {
        self.record(TranscriptLine::Prompt(prompt.to_string()));
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .map(|a| a.trim().to_string())
    }

    fn say(&self, message: &str) {
        self.record(TranscriptLine::Say(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.record(TranscriptLine::Warn(message.to_string()));
    }
}
