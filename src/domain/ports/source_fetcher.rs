//! Source Fetcher Port
//!
//! Materializes a canonical source (URL or local path) at a staging path.

use std::path::Path;

use crate::error::EzmdResult;

/// Fetches document bytes into the staging location.
pub trait SourceFetcher: Send + Sync {
    /// Download or copy `reference` to `staging_path`, returning bytes written.
    ///
    /// Any failure is an [`crate::EzmdError::Retrieval`]; a partially written
    /// staging file must be treated as invalid.
    fn fetch(&self, reference: &str, staging_path: &Path) -> EzmdResult<u64>;
}
