//! Config repository port - abstracts configuration loading and saving.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigWarning};
use crate::error::EzmdResult;

/// Repository trait for configuration management.
///
/// The session reads the config once at startup and writes it back after
/// every mutation; there is no locking, last writer wins.
pub trait ConfigRepository: Send + Sync {
    /// Location of the config file this repository manages.
    fn path(&self) -> PathBuf;

    /// Check if a config file exists at the given path.
    fn exists(&self, path: &Path) -> bool;

    /// Load configuration from a specific path.
    fn load(&self, path: &Path) -> EzmdResult<Config>;

    /// Load configuration with warnings about unknown keys.
    fn load_with_warnings(&self, path: &Path) -> EzmdResult<(Config, Vec<ConfigWarning>)>;

    /// Persist the full configuration to `path`.
    fn save(&self, path: &Path, config: &Config) -> EzmdResult<()>;
}
