//! Sync outcome entities
//!
//! Outcomes are collected, never raised: one failing remote must not stop the
//! rest of a batch.

/// Result of syncing one artifact to one remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub alias: String,
    pub success: bool,
    /// Failure detail for reporting
    pub error: Option<String>,
}

impl SyncOutcome {
    pub fn succeeded(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(alias: impl Into<String>, error: impl ToString) -> Self {
        Self {
            alias: alias.into(),
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Outcomes of a full post-conversion sync, split by phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Transfers to `auto_sync` remotes
    pub auto: Vec<SyncOutcome>,
    /// Transfers to remotes the user picked
    pub selected: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn outcomes(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.auto.iter().chain(self.selected.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.auto.is_empty() && self.selected.is_empty()
    }

    pub fn failed(&self) -> Vec<&SyncOutcome> {
        self.outcomes().filter(|o| !o.success).collect()
    }

    pub fn succeeded(&self) -> Vec<&SyncOutcome> {
        self.outcomes().filter(|o| o.success).collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes().all(|o| o.success)
    }
}
