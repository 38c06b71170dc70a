//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::RemoteSet;
use crate::domain::services::DEFAULT_MAX_FILENAME_LENGTH;
use crate::domain::value_objects::ProviderId;
use crate::error::EzmdResult;
use crate::infrastructure::fs::expand_home;

use super::loader::{self, ConfigWarning};

/// LLM augmentation settings (`[llm]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Let the engine describe images with the chosen provider
    #[serde(default = "default_true")]
    pub use_for_images: bool,

    /// Model used when a provider has no `default_model` of its own
    #[serde(default = "default_model")]
    pub default_model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            use_for_images: true,
            default_model: default_model(),
        }
    }
}

/// One `[providers.<id>]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

/// Remote sync settings (`[sync]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Per-transfer deadline in seconds
    #[serde(default = "default_sync_timeout")]
    pub timeout_secs: u64,

    /// Remotes shown per page in the selection list
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_sync_timeout(),
            page_size: default_page_size(),
        }
    }
}

/// Conversion engine command (`[engine]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine_command")]
    pub command: String,

    /// Extra arguments placed before the input path
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            args: Vec::new(),
        }
    }
}

/// HTTP retrieval settings (`[http]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout(),
        }
    }
}

/// Values taken from `EZMD_*` environment variables.
///
/// Kept apart from the persisted fields so saving never writes them to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub base_context_dir: Option<String>,
    pub max_filename_length: Option<usize>,
    pub sync_timeout_secs: Option<u64>,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_dir")]
    pub base_context_dir: String,

    #[serde(default = "default_max_filename_length")]
    pub max_filename_length: usize,

    #[serde(default)]
    pub force_overwrite_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<ProviderId>,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default = "default_providers")]
    pub providers: BTreeMap<ProviderId, ProviderConfig>,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub remotes: RemoteSet,

    #[serde(skip)]
    pub env: EnvOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_context_dir: default_base_dir(),
            max_filename_length: default_max_filename_length(),
            force_overwrite_default: false,
            default_provider: None,
            llm: LlmConfig::default(),
            providers: default_providers(),
            sync: SyncConfig::default(),
            engine: EngineConfig::default(),
            http: HttpConfig::default(),
            remotes: RemoteSet::default(),
            env: EnvOverrides::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_base_dir() -> String {
    "~/context".to_string()
}

fn default_max_filename_length() -> usize {
    DEFAULT_MAX_FILENAME_LENGTH
}

fn default_sync_timeout() -> u64 {
    10
}

fn default_page_size() -> usize {
    10
}

fn default_engine_command() -> String {
    "markitdown".to_string()
}

fn default_http_timeout() -> u64 {
    60
}

fn default_providers() -> BTreeMap<ProviderId, ProviderConfig> {
    [ProviderId::openai(), ProviderId::google_gemini()]
        .into_iter()
        .map(|id| {
            let cfg = ProviderConfig {
                enabled: false,
                default_model: id.builtin_default_model().map(str::to_string),
            };
            (id, cfg)
        })
        .collect()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EzmdResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> EzmdResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Write the configuration atomically
    pub fn save(&self, path: &Path) -> EzmdResult<()> {
        loader::save(path, self)
    }

    /// Base output directory with `~` expanded (env override wins)
    pub fn base_dir(&self) -> PathBuf {
        let raw = self
            .env
            .base_context_dir
            .as_deref()
            .unwrap_or(&self.base_context_dir);
        expand_home(raw)
    }

    /// `<base>/raw`, where downloads and copies are staged
    pub fn staging_dir(&self) -> PathBuf {
        self.base_dir().join("raw")
    }

    /// Effective filename cap, never below 1
    pub fn max_filename_length(&self) -> usize {
        self.env
            .max_filename_length
            .unwrap_or(self.max_filename_length)
            .max(1)
    }

    pub fn sync_timeout(&self) -> Duration {
        Duration::from_secs(
            self.env
                .sync_timeout_secs
                .unwrap_or(self.sync.timeout_secs)
                .max(1),
        )
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs.max(1))
    }

    pub fn page_size(&self) -> usize {
        self.sync.page_size.max(1)
    }

    pub fn provider(&self, id: &ProviderId) -> Option<&ProviderConfig> {
        self.providers.get(id)
    }

    /// Providers switched on in config, in id order.
    pub fn enabled_providers(&self) -> Vec<ProviderId> {
        self.providers
            .iter()
            .filter(|(_, cfg)| cfg.enabled)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Model for a provider: its own `default_model`, else `[llm].default_model`.
    pub fn model_for(&self, id: &ProviderId) -> String {
        self.provider(id)
            .and_then(|cfg| cfg.default_model.clone())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.llm.default_model.clone())
    }

    pub fn set_provider_enabled(&mut self, id: &ProviderId, enabled: bool) {
        let entry = self
            .providers
            .entry(id.clone())
            .or_insert_with(|| ProviderConfig {
                enabled: false,
                default_model: id.builtin_default_model().map(str::to_string),
            });
        entry.enabled = enabled;
    }
}
