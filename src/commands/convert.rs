//! Convert command
//!
//! `ezmd convert` and the interactive convert flow both end up in
//! [`convert_and_sync`]: prepare (may prompt on collisions), fetch and convert
//! under the spinner, then hand the new file to the sync orchestrator.

use std::path::Path;

use anyhow::{bail, Context, Result};

use ezmd::application::ConvertOutcome;
use ezmd::domain::entities::{ConversionRequest, SyncReport};
use ezmd::domain::services::resolve_source;
use ezmd::domain::value_objects::ProviderId;
use ezmd::error::EzmdResult;
use ezmd::infrastructure::fs::display_with_tilde;
use ezmd::presentation::{create_convert_use_case, create_sync_orchestrator, render, Session};

/// A finished conversion plus whatever syncing followed it.
#[derive(Debug)]
pub struct ConvertRun {
    pub outcome: ConvertOutcome,
    pub sync: SyncReport,
}

/// Reject local sources that do not exist, after Windows path translation.
///
/// URLs and arXiv ids always pass; retrieval reports their failures.
pub fn check_local_source(raw: &str) -> std::result::Result<(), String> {
    let source = resolve_source(raw);
    if source.is_remote() || Path::new(&source.reference).is_file() {
        Ok(())
    } else {
        Err(format!("Local file not found: {}", source.reference))
    }
}

/// Run one request end to end.
pub fn convert_and_sync(
    session: &Session,
    request: ConversionRequest,
    sync: bool,
) -> EzmdResult<ConvertRun> {
    let prompter = session.prompter();
    let use_case = create_convert_use_case(session);

    let prepared = use_case.prepare(request, &session.config, prompter)?;
    let outcome = session.with_spinner("Converting...", || {
        use_case.run(&prepared, &session.config)
    })?;

    prompter.say(&format!(
        "[+] Markdown saved to {}",
        display_with_tilde(&outcome.output_path)
    ));
    if let Some(provider) = &outcome.llm_provider {
        prompter.say(&format!("    Image descriptions by {}", provider));
    }

    let report = if sync {
        create_sync_orchestrator(session.transfer.as_ref(), &session.config).run(
            &outcome.output_path,
            &session.config.remotes,
            prompter,
        )
    } else {
        SyncReport::default()
    };
    for line in render::sync_summary(&report) {
        prompter.say(&line);
    }

    Ok(ConvertRun {
        outcome,
        sync: report,
    })
}

/// Provider for a non-interactive request: the named one, which must be
/// available, or the configured default when it is.
pub fn provider_for_cli(session: &Session, requested: Option<&str>) -> Result<Option<ProviderId>> {
    let Some(name) = requested else {
        return Ok(session.default_provider());
    };

    let id = ProviderId::new(name);
    if !session.available_providers().contains(&id) {
        bail!(
            "provider '{}' is not available; enable it and store its API key in the menu",
            id
        );
    }
    Ok(Some(id))
}

pub fn cmd_convert(
    session: &Session,
    title: &str,
    source: &str,
    provider: Option<&str>,
    overwrite: Option<bool>,
    no_sync: bool,
) -> Result<()> {
    if let Err(message) = check_local_source(source) {
        bail!(message);
    }

    let provider = provider_for_cli(session, provider)?;
    let request = ConversionRequest::new(title, source)
        .with_provider(provider)
        .with_overwrite(overwrite.unwrap_or(session.config.force_overwrite_default));

    let run = convert_and_sync(session, request, !no_sync)
        .with_context(|| format!("Failed to convert '{}'", source))?;

    tracing::info!(
        output = %run.outcome.output_path.display(),
        synced = run.sync.succeeded().len(),
        failed = run.sync.failed().len(),
        "convert command finished"
    );
    Ok(())
}
