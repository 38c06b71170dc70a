//! Session
//!
//! Everything one run of ezmd works with: the loaded configuration plus the
//! injected ports. Commands borrow what they need from here; nothing reads
//! configuration or credentials from globals.

use crate::config::{with_env_overrides, Config};
use crate::domain::ports::{
    ConfigRepository, ConversionEngine, CredentialStore, Prompter, SourceFetcher,
    TransferStrategy,
};
use crate::domain::value_objects::ProviderId;
use crate::ui;

/// Ports a [`Session`] is assembled from.
pub struct SessionDeps {
    pub repo: Box<dyn ConfigRepository>,
    pub credentials: Box<dyn CredentialStore>,
    pub transfer: Box<dyn TransferStrategy>,
    pub engine: Box<dyn ConversionEngine>,
    pub fetcher: Box<dyn SourceFetcher>,
    pub prompter: Box<dyn Prompter>,
}

pub struct Session {
    pub config: Config,
    pub repo: Box<dyn ConfigRepository>,
    pub credentials: Box<dyn CredentialStore>,
    pub transfer: Box<dyn TransferStrategy>,
    pub engine: Box<dyn ConversionEngine>,
    pub fetcher: Box<dyn SourceFetcher>,
    pub prompter: Box<dyn Prompter>,
    animate: bool,
}

impl Session {
    pub fn new(config: Config, deps: SessionDeps) -> Self {
        Self {
            config,
            repo: deps.repo,
            credentials: deps.credentials,
            transfer: deps.transfer,
            engine: deps.engine,
            fetcher: deps.fetcher,
            prompter: deps.prompter,
            animate: false,
        }
    }

    /// Show the spinner around long phases (only takes effect on a terminal).
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    /// Whether a config file has been written yet.
    pub fn config_exists(&self) -> bool {
        self.repo.exists(&self.repo.path())
    }

    /// Persist the current configuration. Failures are reported, not fatal.
    pub fn save(&self) -> bool {
        let path = self.repo.path();
        match self.repo.save(&path, &self.config) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "configuration saved");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save configuration");
                self.prompter
                    .warn(&format!("Failed to save configuration: {}", e));
                false
            }
        }
    }

    /// Providers that are enabled in config and have a stored key.
    pub fn available_providers(&self) -> Vec<ProviderId> {
        self.config
            .enabled_providers()
            .into_iter()
            .filter(|id| self.credentials.has(id))
            .collect()
    }

    /// The configured default provider, if it is currently available.
    pub fn default_provider(&self) -> Option<ProviderId> {
        let default = self.config.default_provider.clone()?;
        self.available_providers()
            .into_iter()
            .find(|id| *id == default)
    }

    pub fn with_spinner<T>(&self, message: &str, work: impl FnOnce() -> T) -> T {
        ui::with_spinner(message, self.animate && ui::spinner_enabled(), work)
    }
}

/// Read the config from `repo`, falling back to defaults.
///
/// Unknown keys and an unparsable file are reported through `prompter`; a
/// broken file is left untouched on disk. `EZMD_*` overrides are applied last.
pub fn load_config(repo: &dyn ConfigRepository, prompter: &dyn Prompter) -> Config {
    let path = repo.path();
    let config = if repo.exists(&path) {
        match repo.load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    tracing::warn!(key = %warning.key, "unknown configuration key");
                    prompter.warn(&warning.to_string());
                }
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                prompter.warn(&format!("{} (using defaults)", e));
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    with_env_overrides(config)
}
