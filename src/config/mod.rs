//! Configuration module for ezmd
//!
//! Resolution order:
//! 1. Environment variables (EZMD_*), never written back to disk
//! 2. User config (~/.config/ezmd/config.toml, or `$EZMD_CONFIG_DIR/config.toml`)
//! 3. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    parse_with_warnings, with_env_overrides, ENV_BASE_DIR, ENV_MAX_FILENAME_LENGTH,
    ENV_SYNC_TIMEOUT,
};
pub use types::{
    Config, EngineConfig, EnvOverrides, HttpConfig, LlmConfig, ProviderConfig, SyncConfig,
};
