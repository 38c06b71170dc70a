//! Interactive convert flow
//!
//! Collects a request, runs it, and reports the outcome. Every failure ends
//! here as one message; the caller goes straight back to the menu.

use ezmd::domain::entities::ConversionRequest;
use ezmd::domain::ports::Prompter;
use ezmd::domain::value_objects::ProviderId;
use ezmd::presentation::Session;

use crate::commands::convert::{check_local_source, convert_and_sync, ConvertRun};

fn ask_non_empty(prompter: &dyn Prompter, prompt: &str) -> Option<String> {
    loop {
        let answer = prompter.input(prompt)?;
        if !answer.is_empty() {
            return Some(answer);
        }
        prompter.warn("A value is required.");
    }
}

/// `0` is none, `1..=n` picks an available provider, blank takes the default.
///
/// The outer `None` means input ended.
pub(crate) fn choose_provider(session: &Session) -> Option<Option<ProviderId>> {
    let available = session.available_providers();
    if available.is_empty() {
        return Some(None);
    }

    let prompter = session.prompter();
    let default = session.default_provider();

    prompter.say("LLM provider for image descriptions:");
    prompter.say("  0) None");
    for (i, id) in available.iter().enumerate() {
        let marker = if default.as_ref() == Some(id) {
            " (default)"
        } else {
            ""
        };
        prompter.say(&format!("  {}) {}{}", i + 1, id, marker));
    }

    let prompt = format!(
        "Provider [0-{}, Enter for {}]",
        available.len(),
        default.as_ref().map(ProviderId::as_str).unwrap_or("none")
    );
    loop {
        let answer = prompter.input(&prompt)?;
        if answer.is_empty() {
            return Some(default);
        }
        match answer.parse::<usize>() {
            Ok(0) => return Some(None),
            Ok(n) if n <= available.len() => return Some(Some(available[n - 1].clone())),
            _ => prompter.warn(&format!("Invalid choice: {}", answer)),
        }
    }
}

pub(crate) fn convert_flow(session: &Session) -> Option<ConvertRun> {
    let prompter = session.prompter();

    let title = ask_non_empty(prompter, "Title for the document")?;
    let source = ask_non_empty(prompter, "Source (URL, arXiv id, or local path)")?;
    if let Err(message) = check_local_source(&source) {
        prompter.warn(&message);
        return None;
    }

    let provider = choose_provider(session)?;
    let overwrite = prompter.confirm(
        "Overwrite existing files?",
        session.config.force_overwrite_default,
    );

    let request = ConversionRequest::new(title, source)
        .with_provider(provider)
        .with_overwrite(overwrite);

    match convert_and_sync(session, request, true) {
        Ok(run) => Some(run),
        Err(e) if e.is_cancellation() => {
            prompter.say(&format!("Cancelled: {}", e));
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "conversion failed");
            prompter.warn(&format!("Error: {}", e));
            None
        }
    }
}
