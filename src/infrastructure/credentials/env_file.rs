//! Secrets file credential store (`<config_dir>/ezmd.env`)
//!
//! Keys are stored as `EZMD_<PROVIDER>_KEY="..."` lines and parsed with
//! `dotenvy`. Reads fall back to the process environment, but the process
//! environment is never modified.

use std::path::{Path, PathBuf};

use crate::domain::ports::CredentialStore;
use crate::domain::value_objects::ProviderId;
use crate::error::{EzmdError, EzmdResult};
use crate::infrastructure::fs::{atomic_write, ezmd_config_dir};

/// File name of the secrets file inside the config directory.
pub const SECRETS_FILE_NAME: &str = "ezmd.env";

#[derive(Debug, Clone)]
pub struct EnvFileCredentialStore {
    path: PathBuf,
    read_process_env: bool,
}

impl EnvFileCredentialStore {
    /// Store at `<config_dir>/ezmd.env`, falling back to the process env.
    pub fn new() -> Self {
        Self::at(ezmd_config_dir().join(SECRETS_FILE_NAME))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_process_env: true,
        }
    }

    /// Ignore the process environment on reads.
    pub fn file_only(mut self) -> Self {
        self.read_process_env = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All `KEY=value` pairs in file order. A missing file is empty.
    fn read_entries(&self) -> EzmdResult<Vec<(String, String)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let iter = dotenvy::from_path_iter(&self.path)
            .map_err(|e| EzmdError::Credential(format!("{}: {}", self.path.display(), e)))?;
        iter.map(|item| {
            item.map_err(|e| EzmdError::Credential(format!("{}: {}", self.path.display(), e)))
        })
        .collect()
    }

    fn write_entries(&self, entries: &[(String, String)]) -> EzmdResult<()> {
        let mut content = String::new();
        for (key, value) in entries {
            content.push_str(key);
            content.push('=');
            content.push_str(&quote_value(value));
            content.push('\n');
        }
        atomic_write(&self.path, content.as_bytes())?;
        restrict_permissions(&self.path)?;
        Ok(())
    }
}

impl Default for EnvFileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for EnvFileCredentialStore {
    fn get(&self, provider: &ProviderId) -> Option<String> {
        let key = provider.secret_key();
        let from_file = match self.read_entries() {
            Ok(entries) => entries.into_iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            Err(e) => {
                tracing::warn!(error = %e, "could not read secrets file");
                None
            }
        };
        from_file
            .or_else(|| {
                if self.read_process_env {
                    std::env::var(&key).ok()
                } else {
                    None
                }
            })
            .filter(|v| !v.trim().is_empty())
    }

    fn set(&self, provider: &ProviderId, secret: &str) -> EzmdResult<()> {
        let key = provider.secret_key();
        let mut entries = self.read_entries()?;
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = secret.to_string(),
            None => entries.push((key.clone(), secret.to_string())),
        }
        self.write_entries(&entries)?;
        tracing::info!(provider = %provider, key = %key, "stored provider key");
        Ok(())
    }

    fn clear(&self, provider: &ProviderId) -> EzmdResult<()> {
        let key = provider.secret_key();
        let mut entries = self.read_entries()?;
        let before = entries.len();
        entries.retain(|(k, _)| *k != key);
        if entries.len() != before {
            self.write_entries(&entries)?;
            tracing::info!(provider = %provider, key = %key, "cleared provider key");
        }
        Ok(())
    }
}

/// Double-quote a value so `dotenvy` reads it back verbatim.
fn quote_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
