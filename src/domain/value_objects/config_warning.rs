//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to the user on startup.
///
/// Raised for unknown keys in `config.toml`; the rest of the file still loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (e.g. `sync.timeout`)
    pub key: String,
    /// Config file the key was found in
    pub file: PathBuf,
    /// 1-indexed line number, when the key could be located
    pub line: Option<usize>,
    /// Closest known key, if one is near enough to be a likely typo
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
