//! Text rendering for listings and summaries.
//!
//! Pure functions returning strings so the interactive commands and the
//! non-interactive subcommands print the same thing.

use crate::config::Config;
use crate::domain::entities::{RemoteSet, RemoteTarget, SyncReport, MISSING_FIELD};
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::fs::display_with_tilde;
use crate::ui::Panel;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// `laptop -> me@laptop:~/ctx [auto-sync]`
pub fn remote_line(remote: &RemoteTarget) -> String {
    let alias = if remote.alias.trim().is_empty() {
        MISSING_FIELD
    } else {
        remote.alias.as_str()
    };
    let auto = if remote.auto_sync { " [auto-sync]" } else { "" };
    format!("{} -> {}{}", alias, remote.display_destination(), auto)
}

/// Numbered remote listing, or a single hint line when there are none.
pub fn remote_lines(remotes: &RemoteSet) -> Vec<String> {
    if remotes.is_empty() {
        return vec!["No remotes configured.".to_string()];
    }
    remotes
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}) {}", i + 1, remote_line(r)))
        .collect()
}

/// `openai: enabled, key set, model gpt-4o`
pub fn provider_line(config: &Config, id: &ProviderId, has_key: bool) -> String {
    let enabled = config.provider(id).is_some_and(|p| p.enabled);
    format!(
        "{}: {}, {}, model {}",
        id,
        if enabled { "enabled" } else { "disabled" },
        if has_key { "key set" } else { "no key" },
        config.model_for(id)
    )
}

/// Current settings as shown at the top of the configuration menu.
pub fn config_panel(config: &Config, supports_unicode: bool) -> String {
    let mut panel = Panel::with_title("Configuration");
    panel.add_line(format!(
        "Base output directory: {}",
        display_with_tilde(&config.base_dir())
    ));
    panel.add_line(format!(
        "Max filename length:   {}",
        config.max_filename_length()
    ));
    panel.add_line(format!(
        "Overwrite by default:  {}",
        yes_no(config.force_overwrite_default)
    ));
    panel.add_line(format!(
        "Default provider:      {}",
        config
            .default_provider
            .as_ref()
            .map(ProviderId::as_str)
            .unwrap_or("none")
    ));
    panel.add_line(format!(
        "LLM image descriptions: {}",
        yes_no(config.llm.use_for_images)
    ));
    panel.add_line(format!(
        "Default model:         {}",
        config.llm.default_model
    ));
    panel.add_line(format!("Remotes:               {}", config.remotes.len()));
    panel.render(supports_unicode)
}

/// One-line totals plus a line per failed remote. Empty for an empty report.
pub fn sync_summary(report: &SyncReport) -> Vec<String> {
    if report.is_empty() {
        return Vec::new();
    }
    let failed = report.failed();
    let mut lines = vec![format!(
        "Sync summary: {} succeeded, {} failed",
        report.succeeded().len(),
        failed.len()
    )];
    for outcome in failed {
        lines.push(format!(
            "  {}: {}",
            outcome.alias,
            outcome.error.as_deref().unwrap_or("unknown error")
        ));
    }
    lines
}
