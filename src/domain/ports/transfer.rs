//! Transfer Strategy Port
//!
//! Pushes a single artifact to `host:dir/`. The production strategy shells
//! out to rsync; tests substitute a recording fake.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Why a transfer to one remote failed.
///
/// These never abort a sync batch; they end up in a [`crate::domain::entities::SyncOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("local file not found: {0}")]
    LocalFileMissing(PathBuf),

    #[error("failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} returned an error (exit code {code:?}): {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("transfer timed out after {0} seconds")]
    TimedOut(u64),

    #[error("remote entry is incomplete: {0}")]
    InvalidTarget(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Strategy for sending files to a remote host.
pub trait TransferStrategy: Send + Sync {
    /// Name of the transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Send `local_file` to `remote_dir` on `host`, giving up after `timeout`.
    fn transfer(
        &self,
        local_file: &Path,
        host: &str,
        remote_dir: &str,
        timeout: Duration,
    ) -> Result<(), TransferError>;

    /// Dry-run connectivity check; transfers no data.
    fn probe(&self, host: &str, remote_dir: &str, timeout: Duration) -> Result<(), TransferError>;

    /// Whether the underlying tool can be run at all.
    fn is_available(&self) -> bool {
        true
    }
}

/// Build the `host:dir/` target string, forcing a trailing slash so the
/// remote side always treats `dir` as a directory.
pub fn remote_spec(host: &str, remote_dir: &str) -> String {
    if remote_dir.ends_with('/') {
        format!("{}:{}", host, remote_dir)
    } else {
        format!("{}:{}/", host, remote_dir)
    }
}
