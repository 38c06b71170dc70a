//! Sync Orchestrator
//!
//! Fans a freshly converted artifact out to remote targets:
//!
//! - Idle: no remotes configured, nothing happens
//! - Auto phase: every `auto_sync` remote, no questions asked
//! - Optional phase: one yes/no question (wording depends on the auto phase)
//! - Selection phase: paginated list, comma-separated 1-based indices
//! - Transfer phase: each selected remote in order
//!
//! Transfer failures are recorded per remote and never stop the batch.

use std::path::Path;
use std::time::Duration;

use crate::domain::entities::{RemoteSet, RemoteTarget, SyncOutcome, SyncReport};
use crate::domain::ports::{Prompter, TransferStrategy};

pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PAGE_SIZE: usize = 10;

const ASK_FIRST: &str = "Sync new .md file to a remote?";
const ASK_ADDITIONAL: &str = "Sync to additional remote(s) as well?";

pub struct SyncOrchestrator<'a> {
    transfer: &'a dyn TransferStrategy,
    timeout: Duration,
    page_size: usize,
}

impl<'a> SyncOrchestrator<'a> {
    pub fn new(transfer: &'a dyn TransferStrategy) -> Self {
        Self {
            transfer,
            timeout: DEFAULT_SYNC_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Run the full post-conversion flow for one artifact.
    pub fn run(
        &self,
        artifact: &Path,
        remotes: &RemoteSet,
        prompter: &dyn Prompter,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        if remotes.is_empty() {
            return report;
        }

        if !self.transfer.is_available() {
            tracing::warn!(transfer = self.transfer.name(), "transfer tool unavailable");
            prompter.warn(&format!(
                "{} is not installed or not on PATH; transfers will fail.",
                self.transfer.name()
            ));
        }

        report.auto = self.auto_sync(artifact, remotes, prompter);

        let question = if remotes.has_auto_sync() {
            ASK_ADDITIONAL
        } else {
            ASK_FIRST
        };
        if !prompter.confirm(question, false) {
            return report;
        }

        let selected = self.select_targets(remotes, prompter);
        report.selected = selected
            .into_iter()
            .map(|target| self.sync_to(artifact, target, prompter))
            .collect();
        report
    }

    /// Transfer to every `auto_sync` remote.
    pub fn auto_sync(
        &self,
        artifact: &Path,
        remotes: &RemoteSet,
        prompter: &dyn Prompter,
    ) -> Vec<SyncOutcome> {
        remotes
            .auto_sync_targets()
            .map(|target| self.sync_to(artifact, target, prompter))
            .collect()
    }

    /// Transfer to one remote and record the outcome.
    pub fn sync_to(
        &self,
        artifact: &Path,
        target: &RemoteTarget,
        prompter: &dyn Prompter,
    ) -> SyncOutcome {
        prompter.say(&format!(
            "Syncing to '{}' ({})...",
            target.alias,
            target.display_destination()
        ));

        match self
            .transfer
            .transfer(artifact, &target.ssh_host, &target.remote_dir, self.timeout)
        {
            Ok(()) => {
                tracing::info!(
                    alias = %target.alias,
                    method = self.transfer.name(),
                    "sync succeeded"
                );
                prompter.say(&format!("[+] Synced to '{}'.", target.alias));
                SyncOutcome::succeeded(&target.alias)
            }
            Err(e) => {
                tracing::warn!(alias = %target.alias, error = %e, "sync failed");
                prompter.warn(&format!("Sync to '{}' failed: {}", target.alias, e));
                SyncOutcome::failed(&target.alias, e)
            }
        }
    }

    /// Paginated multi-select. Blank input or end of input selects nothing.
    pub fn select_targets<'r>(
        &self,
        remotes: &'r RemoteSet,
        prompter: &dyn Prompter,
    ) -> Vec<&'r RemoteTarget> {
        let targets: Vec<&RemoteTarget> = remotes.iter().collect();
        if targets.is_empty() {
            return Vec::new();
        }
        let pages = targets.len().div_ceil(self.page_size);
        let mut page = 0usize;

        loop {
            let start = page * self.page_size;
            let end = (start + self.page_size).min(targets.len());

            prompter.say("Available remotes:");
            for (idx, target) in targets.iter().enumerate().take(end).skip(start) {
                let marker = if target.auto_sync { " [auto]" } else { "" };
                prompter.say(&format!(
                    "  ({}) {} -> {}{}",
                    idx + 1,
                    target.alias,
                    target.display_destination(),
                    marker
                ));
            }
            if pages > 1 {
                prompter.say(&format!(
                    "Page {}/{}: 'n' next, 'p' previous.",
                    page + 1,
                    pages
                ));
            }

            let Some(answer) =
                prompter.input("Remotes to sync, comma-separated (e.g. 1,3), blank to skip")
            else {
                return Vec::new();
            };

            match answer.as_str() {
                "" => return Vec::new(),
                "n" | "N" if pages > 1 => {
                    if page + 1 < pages {
                        page += 1;
                    } else {
                        prompter.warn("Already on the last page.");
                    }
                }
                "p" | "P" if pages > 1 => {
                    if page > 0 {
                        page -= 1;
                    } else {
                        prompter.warn("Already on the first page.");
                    }
                }
                _ => {
                    let (indices, invalid) = parse_selection(&answer, targets.len());
                    for token in &invalid {
                        prompter.warn(&format!("Invalid selection: {}", token));
                    }
                    return indices.into_iter().map(|i| targets[i]).collect();
                }
            }
        }
    }
}

/// Parse `"1, 3,x"` against a list of `count` items.
///
/// Returns 0-based indices in input order (repeats kept) and the tokens
/// that were not valid 1-based indices. Empty tokens are ignored.
pub fn parse_selection(input: &str, count: usize) -> (Vec<usize>, Vec<String>) {
    let mut indices = Vec::new();
    let mut invalid = Vec::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => indices.push(n - 1),
            _ => invalid.push(token.to_string()),
        }
    }
    (indices, invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::TransferError;
    use crate::infrastructure::prompt::ScriptedPrompter;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Records every call; fails for hosts in `failing`
    #[derive(Default)]
    struct RecordingTransfer {
        calls: Mutex<Vec<String>>,
        failing: HashSet<String>,
        missing: bool,
    }

    impl RecordingTransfer {
        fn failing_for(hosts: &[&str]) -> Self {
            Self {
                failing: hosts.iter().map(|h| h.to_string()).collect(),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TransferStrategy for RecordingTransfer {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn transfer(
            &self,
            _local_file: &Path,
            host: &str,
            _remote_dir: &str,
            _timeout: Duration,
        ) -> Result<(), TransferError> {
            self.calls.lock().unwrap().push(host.to_string());
            if self.failing.contains(host) {
                Err(TransferError::Failed {
                    program: "rsync".into(),
                    code: Some(255),
                    stderr: "connection refused".into(),
                })
            } else {
                Ok(())
            }
        }

        fn probe(&self, _: &str, _: &str, _: Duration) -> Result<(), TransferError> {
            Ok(())
        }

        fn is_available(&self) -> bool {
            !self.missing
        }
    }

    fn remotes(specs: &[(&str, bool)]) -> RemoteSet {
        specs
            .iter()
            .map(|(alias, auto)| {
                RemoteTarget::new(*alias, format!("{}-host", alias), "/dir").with_auto_sync(*auto)
            })
            .collect()
    }

    #[test]
    fn parse_selection_reports_invalid_tokens() {
        let (indices, invalid) = parse_selection("1, 3,x,,9, 2", 3);
        assert_eq!(indices, vec![0, 2, 1]);
        assert_eq!(invalid, vec!["x", "9"]);
    }

    #[test]
    fn parse_selection_keeps_repeats() {
        let (indices, invalid) = parse_selection("2,2", 2);
        assert_eq!(indices, vec![1, 1]);
        assert!(invalid.is_empty());
    }

    #[test]
    fn parse_selection_rejects_zero() {
        let (indices, invalid) = parse_selection("0", 2);
        assert!(indices.is_empty());
        assert_eq!(invalid, vec!["0"]);
    }

    #[test]
    fn no_remotes_is_idle() {
        let transfer = RecordingTransfer::default();
        let prompter = ScriptedPrompter::new(Vec::<String>::new());
        let report =
            SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &RemoteSet::new(), &prompter);
        assert!(report.is_empty());
        assert!(prompter.prompts().is_empty());
        assert!(transfer.calls().is_empty());
    }

    #[test]
    fn missing_transfer_tool_warns_once_and_still_attempts() {
        let transfer = RecordingTransfer {
            missing: true,
            ..RecordingTransfer::default()
        };
        let set = remotes(&[("a", true), ("b", true)]);
        let prompter = ScriptedPrompter::new(["n"]);

        SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert_eq!(
            prompter.warnings(),
            vec!["recording is not installed or not on PATH; transfers will fail."]
        );
        assert_eq!(transfer.calls(), vec!["a-host", "b-host"]);
    }

    #[test]
    fn available_transfer_tool_does_not_warn() {
        let transfer = RecordingTransfer::default();
        let set = remotes(&[("a", false)]);
        let prompter = ScriptedPrompter::new([""]);

        SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert!(prompter.warnings().is_empty());
    }

    #[test]
    fn auto_sync_failure_does_not_stop_batch() {
        let transfer = RecordingTransfer::failing_for(&["a-host"]);
        let set = remotes(&[("a", true), ("b", true)]);
        let prompter = ScriptedPrompter::new(["n"]);

        let report = SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert_eq!(transfer.calls(), vec!["a-host", "b-host"]);
        assert_eq!(report.failed().len(), 1);
        assert_eq!(report.failed()[0].alias, "a");
        assert_eq!(report.succeeded().len(), 1);
        assert_eq!(
            prompter.prompts(),
            vec!["Sync to additional remote(s) as well? (y/N)"]
        );
    }

    #[test]
    fn without_auto_targets_asks_first_question() {
        let transfer = RecordingTransfer::default();
        let set = remotes(&[("a", false)]);
        let prompter = ScriptedPrompter::new([""]);

        let report = SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert!(report.is_empty());
        assert_eq!(prompter.prompts(), vec!["Sync new .md file to a remote? (y/N)"]);
    }

    #[test]
    fn selection_transfers_each_chosen_target() {
        let transfer = RecordingTransfer::failing_for(&["b-host"]);
        let set = remotes(&[("a", false), ("b", false), ("c", false)]);
        let prompter = ScriptedPrompter::new(["y", "3, b, 2"]);

        let report = SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert_eq!(transfer.calls(), vec!["c-host", "b-host"]);
        assert_eq!(report.selected.len(), 2);
        assert!(report.selected[0].success);
        assert!(!report.selected[1].success);
        assert!(prompter
            .warnings()
            .iter()
            .any(|w| w == "Invalid selection: b"));
    }

    #[test]
    fn pagination_navigates_pages() {
        let transfer = RecordingTransfer::default();
        let set = remotes(&[("a", false), ("b", false), ("c", false)]);
        let prompter = ScriptedPrompter::new(["y", "n", "p", "p", "n", "3"]);

        let report = SyncOrchestrator::new(&transfer)
            .with_page_size(2)
            .run(Path::new("a.md"), &set, &prompter);

        assert_eq!(transfer.calls(), vec!["c-host"]);
        assert_eq!(report.selected.len(), 1);
        assert!(prompter
            .warnings()
            .iter()
            .any(|w| w == "Already on the first page."));
        assert!(prompter.said().iter().any(|s| s.contains("Page 2/2")));
    }

    #[test]
    fn end_of_input_during_selection_selects_nothing() {
        let transfer = RecordingTransfer::default();
        let set = remotes(&[("a", false)]);
        let prompter = ScriptedPrompter::new(["y"]);

        let report = SyncOrchestrator::new(&transfer).run(Path::new("a.md"), &set, &prompter);

        assert!(report.is_empty());
        assert!(transfer.calls().is_empty());
    }
}
