//! TOML-based configuration repository implementation.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigWarning};
use crate::domain::ports::ConfigRepository;
use crate::error::EzmdResult;
use crate::infrastructure::fs::ezmd_config_dir;

/// File name of the config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// TOML configuration repository implementation.
///
/// Delegates to the Config methods for file loading/saving, providing a
/// trait-based abstraction for dependency injection.
#[derive(Debug, Clone)]
pub struct TomlConfigRepository {
    path: PathBuf,
}

impl TomlConfigRepository {
    /// Repository for `<config_dir>/config.toml`.
    pub fn new() -> Self {
        Self::at(ezmd_config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for TomlConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> EzmdResult<Config> {
        Config::load(path)
    }

    fn load_with_warnings(&self, path: &Path) -> EzmdResult<(Config, Vec<ConfigWarning>)> {
        Config::load_with_warnings(path)
    }

    fn save(&self, path: &Path, config: &Config) -> EzmdResult<()> {
        config.save(path)
    }
}
