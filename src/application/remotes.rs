//! Remote management use cases (add / edit / remove)
//!
//! Each operation mutates a [`RemoteSet`] in place and returns what changed;
//! persisting the set is the caller's job.

use std::time::Duration;

use crate::domain::entities::{RemoteSet, RemoteTarget};
use crate::domain::ports::{Prompter, TransferStrategy};

/// Default remote directory when the user leaves it blank.
pub const DEFAULT_REMOTE_DIR: &str = "~";

/// What a management operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteChange {
    Added(String),
    Updated(String),
    Removed(String),
}

impl RemoteChange {
    pub fn alias(&self) -> &str {
        match self {
            Self::Added(a) | Self::Updated(a) | Self::Removed(a) => a,
        }
    }
}

pub struct RemoteManager<'a> {
    transfer: &'a dyn TransferStrategy,
    probe_timeout: Duration,
}

impl<'a> RemoteManager<'a> {
    pub fn new(transfer: &'a dyn TransferStrategy, probe_timeout: Duration) -> Self {
        Self {
            transfer,
            probe_timeout,
        }
    }

    /// Dry-run connectivity check, reported through the prompter.
    fn probe(&self, host: &str, remote_dir: &str, prompter: &dyn Prompter) -> bool {
        prompter.say("Testing rsync connection with a dry run...");
        match self.transfer.probe(host, remote_dir, self.probe_timeout) {
            Ok(()) => {
                prompter.say("[+] Connection test succeeded.");
                true
            }
            Err(e) => {
                tracing::info!(host = %host, error = %e, "probe failed");
                prompter.warn(&format!("Connection test failed: {}", e));
                false
            }
        }
    }

    /// Ask for alias, host and directory, probe, then add.
    pub fn add(&self, remotes: &mut RemoteSet, prompter: &dyn Prompter) -> Option<RemoteChange> {
        let alias = prompter.input("Alias (e.g. 'mylaptop')")?;
        if alias.is_empty() {
            prompter.warn("Alias is empty, aborting.");
            return None;
        }
        if remotes.contains(&alias) {
            prompter.warn(&format!("Remote '{}' already exists.", alias));
            return None;
        }

        let ssh_host = prompter.input("SSH host (e.g. user@myhost)")?;
        let remote_dir = prompter
            .input(&format!("Remote directory (default={})", DEFAULT_REMOTE_DIR))?;
        let remote_dir = if remote_dir.is_empty() {
            DEFAULT_REMOTE_DIR.to_string()
        } else {
            remote_dir
        };

        if !self.probe(&ssh_host, &remote_dir, prompter)
            && !prompter.confirm("Add anyway?", false)
        {
            return None;
        }

        let auto_sync = prompter.confirm("Enable auto_sync for this remote?", false);
        let target =
            RemoteTarget::new(alias.clone(), ssh_host, remote_dir).with_auto_sync(auto_sync);

        match remotes.insert(target) {
            Ok(()) => {
                prompter.say(&format!("[+] Remote '{}' added.", alias));
                Some(RemoteChange::Added(alias))
            }
            Err(e) => {
                prompter.warn(&e.to_string());
                None
            }
        }
    }

    /// Pick a remote by index and update it; blank answers keep values.
    pub fn edit(&self, remotes: &mut RemoteSet, prompter: &dyn Prompter) -> Option<RemoteChange> {
        let index = choose_remote(remotes, "Which remote do you want to edit?", prompter)?;
        let current = remotes.by_index(index)?.clone();
        let alias = current.alias.clone();
        prompter.say(&format!("Editing remote '{}'...", current.display_alias()));

        let ssh_host = prompter.input(&format!(
            "SSH host [current={}] (blank to keep)",
            current.display_host()
        ))?;
        let remote_dir = prompter.input(&format!(
            "Remote directory [current={}] (blank to keep)",
            current.display_dir()
        ))?;

        let mut updated = current.clone();
        if !ssh_host.is_empty() {
            updated.ssh_host = ssh_host;
        }
        if !remote_dir.is_empty() {
            updated.remote_dir = remote_dir;
        }

        if prompter.confirm("Test connection again?", false) {
            self.probe(&updated.ssh_host, &updated.remote_dir, prompter);
        }

        let answer = prompter.input(&format!(
            "auto_sync? [current={}] (y=enable / n=disable / Enter=keep)",
            current.auto_sync
        ))?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => updated.auto_sync = true,
            "n" | "no" => updated.auto_sync = false,
            _ => {}
        }

        let slot = remotes.by_index_mut(index)?;
        *slot = updated;
        prompter.say("[+] Remote updated.");
        Some(RemoteChange::Updated(alias))
    }

    /// Pick a remote by index and remove it after confirmation.
    pub fn remove(&self, remotes: &mut RemoteSet, prompter: &dyn Prompter) -> Option<RemoteChange> {
        let index = choose_remote(remotes, "Which remote do you want to remove?", prompter)?;
        let shown = remotes.by_index(index)?.display_alias().to_string();
        if !prompter.confirm(
            &format!("Are you sure you want to remove remote '{}'?", shown),
            false,
        ) {
            return None;
        }
        let removed = remotes.remove_at(index)?;
        prompter.say(&format!("[+] Remote '{}' removed.", shown));
        Some(RemoteChange::Removed(removed.alias))
    }
}

/// List remotes with 1-based numbers and read one choice, returned as the
/// 1-based index.
fn choose_remote(remotes: &RemoteSet, heading: &str, prompter: &dyn Prompter) -> Option<usize> {
    if remotes.is_empty() {
        prompter.warn("No remotes configured.");
        return None;
    }

    prompter.say(heading);
    for (idx, remote) in remotes.iter().enumerate() {
        prompter.say(&format!("  {}) {}", idx + 1, remote.display_alias()));
    }

    let answer = prompter.input("Selection")?;
    match answer.parse::<usize>().ok().filter(|&n| remotes.by_index(n).is_some()) {
        Some(index) => Some(index),
        None => {
            prompter.warn("Invalid choice.");
            None
        }
    }
}
