//! Port doubles shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ezmd::domain::ports::{
    ConversionEngine, LlmAttachment, SourceFetcher, TransferError, TransferStrategy,
};
use ezmd::error::{EzmdError, EzmdResult};

/// One recorded call to [`FakeTransfer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    pub local: PathBuf,
    pub host: String,
    pub remote_dir: String,
    pub timeout: Duration,
}

/// Transfer strategy that records calls; hosts in `failing` fail.
#[derive(Debug, Clone, Default)]
pub struct FakeTransfer {
    failing: Vec<String>,
    calls: Arc<Mutex<Vec<TransferCall>>>,
}

impl FakeTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(hosts: &[&str]) -> Self {
        Self {
            failing: hosts.iter().map(|h| h.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<TransferCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn hosts(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.host).collect()
    }
}

impl TransferStrategy for FakeTransfer {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn transfer(
        &self,
        local_file: &Path,
        host: &str,
        remote_dir: &str,
        timeout: Duration,
    ) -> Result<(), TransferError> {
        self.calls.lock().unwrap().push(TransferCall {
            local: local_file.to_path_buf(),
            host: host.to_string(),
            remote_dir: remote_dir.to_string(),
            timeout,
        });
        if self.failing.iter().any(|h| h == host) {
            return Err(TransferError::Failed {
                program: "rsync".to_string(),
                code: Some(255),
                stderr: format!("ssh: connect to host {} port 22: Connection refused", host),
            });
        }
        Ok(())
    }

    fn probe(
        &self,
        host: &str,
        _remote_dir: &str,
        _timeout: Duration,
    ) -> Result<(), TransferError> {
        if self.failing.iter().any(|h| h == host) {
            return Err(TransferError::TimedOut(1));
        }
        Ok(())
    }
}

/// Engine returning a fixed document.
#[derive(Debug, Default)]
pub struct StaticEngine {
    markdown: String,
    seen: Mutex<Vec<(PathBuf, Option<LlmAttachment>)>>,
}

impl StaticEngine {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Inputs and attachments seen so far.
    pub fn seen(&self) -> Vec<(PathBuf, Option<LlmAttachment>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl ConversionEngine for StaticEngine {
    fn name(&self) -> &str {
        "static"
    }

    fn convert(&self, input: &Path, llm: Option<&LlmAttachment>) -> EzmdResult<String> {
        if !input.is_file() {
            return Err(EzmdError::conversion(input, "input missing"));
        }
        self.seen
            .lock()
            .unwrap()
            .push((input.to_path_buf(), llm.cloned()));
        Ok(self.markdown.clone())
    }
}

/// Fetcher writing the same bytes for every reference.
#[derive(Debug, Clone)]
pub struct WriteFetcher {
    bytes: Vec<u8>,
}

impl WriteFetcher {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl SourceFetcher for WriteFetcher {
    fn fetch(&self, _reference: &str, staging_path: &Path) -> EzmdResult<u64> {
        if let Some(parent) = staging_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(staging_path, &self.bytes)?;
        Ok(self.bytes.len() as u64)
    }
}
