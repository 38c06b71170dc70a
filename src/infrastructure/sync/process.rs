//! Child process execution with a hard deadline

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::TransferError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const STDERR_GRACE: Duration = Duration::from_secs(1);

/// Exit status and captured stderr of a finished child.
#[derive(Debug)]
pub struct Finished {
    pub status: ExitStatus,
    pub stderr: String,
}

/// Run `cmd` to completion or kill it once `timeout` has elapsed.
///
/// stdout is discarded, stderr is captured on a helper thread. A child that
/// is still running at the deadline is killed and reported as
/// [`TransferError::TimedOut`].
pub fn run_with_deadline(mut cmd: Command, timeout: Duration) -> Result<Finished, TransferError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| TransferError::Spawn {
            program: program.clone(),
            reason: e.to_string(),
        })?;

    let stderr_rx = spawn_stderr_reader(&mut child);
    let deadline = Instant::now() + timeout;

    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                // grandchildren (ssh) may still hold the pipe; do not wait forever
                let stderr = stderr_rx
                    .and_then(|rx| rx.recv_timeout(STDERR_GRACE).ok())
                    .unwrap_or_default();
                return Ok(Finished { status, stderr });
            }
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                tracing::warn!(
                    program = %program,
                    timeout_secs = timeout.as_secs(),
                    "killed child at deadline"
                );
                return Err(TransferError::TimedOut(timeout.as_secs()));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                return Err(TransferError::Io(e.to_string()));
            }
        }
    }
}

fn spawn_stderr_reader(child: &mut Child) -> Option<mpsc::Receiver<String>> {
    let mut stderr = child.stderr.take()?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr.read_to_string(&mut buf);
        let _ = tx.send(buf);
    });
    Some(rx)
}
