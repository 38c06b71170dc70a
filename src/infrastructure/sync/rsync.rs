//! Rsync Transfer Strategy
//!
//! `rsync -avz -e "ssh ..." <local> <host>:<dir>/`, one file per call, with
//! SSH in batch mode so a missing key fails fast instead of prompting.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::NamedTempFile;

use super::process::run_with_deadline;
use crate::domain::ports::{remote_spec, TransferError, TransferStrategy};

/// Transfer strategy using the `rsync` binary
#[derive(Debug, Clone)]
pub struct RsyncTransfer {
    program: String,
}

impl RsyncTransfer {
    pub fn new() -> Self {
        Self {
            program: "rsync".to_string(),
        }
    }

    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn run(
        &self,
        local_file: &Path,
        host: &str,
        remote_dir: &str,
        timeout: Duration,
        dry_run: bool,
    ) -> Result<(), TransferError> {
        if host.trim().is_empty() || remote_dir.trim().is_empty() {
            return Err(TransferError::InvalidTarget(format!(
                "host '{}' dir '{}'",
                host, remote_dir
            )));
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(rsync_args(local_file, host, remote_dir, timeout, dry_run));

        tracing::debug!(
            host = %host,
            remote_dir = %remote_dir,
            local = %local_file.display(),
            dry_run,
            "starting rsync"
        );

        let finished = run_with_deadline(cmd, timeout)?;
        if finished.status.success() {
            return Ok(());
        }

        let stderr = finished.stderr.trim().to_string();
        tracing::warn!(
            host = %host,
            code = ?finished.status.code(),
            error = %stderr,
            "rsync failed"
        );
        Err(TransferError::Failed {
            program: self.program.clone(),
            code: finished.status.code(),
            stderr,
        })
    }
}

impl Default for RsyncTransfer {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument list for one rsync invocation.
fn rsync_args(
    local_file: &Path,
    host: &str,
    remote_dir: &str,
    timeout: Duration,
    dry_run: bool,
) -> Vec<OsString> {
    let ssh = format!(
        "ssh -o BatchMode=yes -o ConnectTimeout={}",
        timeout.as_secs().max(1)
    );
    let mut args: Vec<OsString> = Vec::new();
    if dry_run {
        args.push("--dry-run".into());
    }
    args.push("-avz".into());
    args.push("-e".into());
    args.push(ssh.into());
    args.push(local_file.as_os_str().to_os_string());
    args.push(remote_spec(host, remote_dir).into());
    args
}

impl TransferStrategy for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn transfer(
        &self,
        local_file: &Path,
        host: &str,
        remote_dir: &str,
        timeout: Duration,
    ) -> Result<(), TransferError> {
        if !local_file.is_file() {
            return Err(TransferError::LocalFileMissing(local_file.to_path_buf()));
        }
        self.run(local_file, host, remote_dir, timeout, false)
    }

    fn probe(&self, host: &str, remote_dir: &str, timeout: Duration) -> Result<(), TransferError> {
        let probe_file = NamedTempFile::new().map_err(|e| TransferError::Io(e.to_string()))?;
        self.run(probe_file.path(), host, remote_dir, timeout, true)
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn rsync_transfer_name() {
        assert_eq!(RsyncTransfer::new().name(), "rsync");
    }

    #[test]
    fn missing_program_is_unavailable() {
        let transfer = RsyncTransfer::with_program("ezmd-test-no-such-rsync");
        assert!(!transfer.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn runnable_program_is_available() {
        // `true --version` exits 0 on coreutils and busybox
        let transfer = RsyncTransfer::with_program("true");
        assert!(transfer.is_available());
    }

    #[test]
    fn transfer_args_normalize_remote_dir() {
        let args = rsync_args(
            Path::new("/ctx/Paper.md"),
            "me@laptop",
            "~/notes",
            Duration::from_secs(10),
            false,
        );
        assert_eq!(
            strings(args),
            vec![
                "-avz",
                "-e",
                "ssh -o BatchMode=yes -o ConnectTimeout=10",
                "/ctx/Paper.md",
                "me@laptop:~/notes/",
            ]
        );
    }

    #[test]
    fn probe_args_are_dry_run() {
        let args = strings(rsync_args(
            Path::new("/tmp/probe"),
            "host",
            "/srv/",
            Duration::from_secs(3),
            true,
        ));
        assert_eq!(args[0], "--dry-run");
        assert_eq!(args.last().unwrap(), "host:/srv/");
    }

    #[test]
    fn missing_local_file_fails_without_spawning() {
        let err = RsyncTransfer::new()
            .transfer(
                Path::new("/no/such/file.md"),
                "host",
                "/dir",
                Duration::from_secs(1),
            )
            .unwrap_err();
        assert_eq!(
            err,
            TransferError::LocalFileMissing("/no/such/file.md".into())
        );
    }

    #[test]
    fn incomplete_target_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = RsyncTransfer::new()
            .transfer(file.path(), "", "/dir", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, TransferError::InvalidTarget(_)));
    }
}
