//! Prompter implementations

mod scripted;
mod terminal;

pub use scripted::{ScriptedPrompter, TranscriptLine};
pub use terminal::TerminalPrompter;
