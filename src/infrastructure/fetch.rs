//! Source acquisition: HTTP download or local copy into the staging path

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use tempfile::NamedTempFile;

use crate::domain::ports::SourceFetcher;
use crate::domain::services::is_url;
use crate::error::{EzmdError, EzmdResult};

const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Fetches URLs with a blocking reqwest client and copies everything else
/// from the local filesystem.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> EzmdResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ezmd/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| EzmdError::retrieval("http client", e))?;
        Ok(Self { client })
    }

    fn download(&self, url: &str, staging_path: &Path) -> EzmdResult<u64> {
        tracing::info!(url = %url, dest = %staging_path.display(), "downloading");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EzmdError::retrieval(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EzmdError::retrieval(url, format!("HTTP {}", status)));
        }

        let mut tmp = NamedTempFile::new_in(staging_dir(staging_path))?;
        let written = {
            let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, tmp.as_file_mut());
            let mut reader = BufReader::with_capacity(COPY_BUFFER_SIZE, response);
            let written =
                io::copy(&mut reader, &mut writer).map_err(|e| EzmdError::retrieval(url, e))?;
            writer.flush()?;
            written
        };
        tmp.persist(staging_path).map_err(|e| e.error)?;

        tracing::debug!(url = %url, bytes = written, "download complete");
        Ok(written)
    }

    fn copy_local(&self, source: &Path, staging_path: &Path) -> EzmdResult<u64> {
        let reference = source.display().to_string();
        let metadata = fs::metadata(source).map_err(|e| EzmdError::retrieval(&reference, e))?;
        if !metadata.is_file() {
            return Err(EzmdError::retrieval(reference, "not a regular file"));
        }
        if is_same_file(source, staging_path) {
            return Err(EzmdError::retrieval(
                reference,
                "source and staging path are the same file",
            ));
        }

        tracing::info!(
            source = %source.display(),
            dest = %staging_path.display(),
            "copying local file"
        );

        // fs::copy carries permission bits over
        let tmp = NamedTempFile::new_in(staging_dir(staging_path))?;
        let written =
            fs::copy(source, tmp.path()).map_err(|e| EzmdError::retrieval(&reference, e))?;

        if let Ok(modified) = metadata.modified() {
            if let Err(e) = tmp.as_file().set_modified(modified) {
                tracing::debug!(error = %e, "could not preserve modification time");
            }
        }
        tmp.persist(staging_path).map_err(|e| e.error)?;
        Ok(written)
    }
}

fn staging_dir(staging_path: &Path) -> &Path {
    match staging_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// The staging path is only replaced once the new content is complete; a
/// failed fetch leaves whatever was there before.
impl SourceFetcher for HttpFetcher {
    fn fetch(&self, reference: &str, staging_path: &Path) -> EzmdResult<u64> {
        fs::create_dir_all(staging_dir(staging_path))?;

        if is_url(reference) {
            self.download(reference, staging_path)
        } else {
            self.copy_local(Path::new(reference), staging_path)
        }
    }
}
