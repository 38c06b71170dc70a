//! Configuration loading and persistence

use std::fs;
use std::path::Path;

use crate::error::{EzmdError, EzmdResult};
use crate::infrastructure::fs::atomic_write;

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

pub const ENV_BASE_DIR: &str = "EZMD_BASE_DIR";
pub const ENV_MAX_FILENAME_LENGTH: &str = "EZMD_MAX_FILENAME_LENGTH";
pub const ENV_SYNC_TIMEOUT: &str = "EZMD_SYNC_TIMEOUT";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EzmdResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for error and warning locations.
pub fn parse_with_warnings(content: &str, path: &Path) -> EzmdResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EzmdError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Serialize and write the config via temp file + rename.
pub fn save(path: &Path, config: &Config) -> EzmdResult<()> {
    let content = toml::to_string_pretty(config).map_err(|e| EzmdError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    atomic_write(path, content.as_bytes())?;
    tracing::debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Apply environment variable overrides (EZMD_* prefix)
///
/// Unparsable numeric values are ignored with a warning.
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // EZMD_BASE_DIR
    if let Some(dir) = lookup(ENV_BASE_DIR).filter(|d| !d.trim().is_empty()) {
        config.env.base_context_dir = Some(dir);
    }

    // EZMD_MAX_FILENAME_LENGTH
    if let Some(raw) = lookup(ENV_MAX_FILENAME_LENGTH) {
        match raw.trim().parse::<usize>() {
            Ok(len) => config.env.max_filename_length = Some(len),
            Err(_) => {
                tracing::warn!(
                    var = ENV_MAX_FILENAME_LENGTH,
                    value = %raw,
                    "ignoring invalid value"
                )
            }
        }
    }

    // EZMD_SYNC_TIMEOUT (seconds)
    if let Some(raw) = lookup(ENV_SYNC_TIMEOUT) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.env.sync_timeout_secs = Some(secs),
            Err(_) => {
                tracing::warn!(var = ENV_SYNC_TIMEOUT, value = %raw, "ignoring invalid value")
            }
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "base_context_dir",
        "max_filename_length",
        "force_overwrite_default",
        "default_provider",
        "llm",
        "use_for_images",
        "default_model",
        "providers",
        "enabled",
        "sync",
        "timeout_secs",
        "page_size",
        "engine",
        "command",
        "args",
        "http",
        "remotes",
        "alias",
        "ssh_host",
        "remote_dir",
        "auto_sync",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
