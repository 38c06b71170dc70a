//! Home and config directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests point
//! `EZMD_TEST_HOME` at a temp directory instead. `EZMD_CONFIG_DIR` relocates
//! the config directory outright (config file and secrets file).

use std::path::{Path, PathBuf};

/// Environment variable for test isolation of the home directory.
pub const EZMD_TEST_HOME_VAR: &str = "EZMD_TEST_HOME";

/// Environment variable that overrides the config directory.
pub const EZMD_CONFIG_DIR_VAR: &str = "EZMD_CONFIG_DIR";

/// Home directory for ezmd-internal paths (`EZMD_TEST_HOME` wins).
pub fn ezmd_home_dir() -> Option<PathBuf> {
    std::env::var(EZMD_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Directory holding `config.toml` and `ezmd.env`.
///
/// `$EZMD_CONFIG_DIR`, else `~/.config/ezmd`, else `./.ezmd` when no home
/// directory can be resolved.
pub fn ezmd_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(EZMD_CONFIG_DIR_VAR).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    match ezmd_home_dir() {
        Some(home) => home.join(".config").join("ezmd"),
        None => PathBuf::from(".ezmd"),
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw, ezmd_home_dir().as_deref())
}

fn expand_home_with(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        home.to_path_buf()
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(raw)
    }
}

/// Replace the home prefix with `~` for display.
pub fn display_with_tilde(path: &Path) -> String {
    if let Some(home) = ezmd_home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_replaces_tilde_prefix() {
        let home = Path::new("/home/me");
        assert_eq!(expand_home_with("~", Some(home)), PathBuf::from("/home/me"));
        assert_eq!(
            expand_home_with("~/context", Some(home)),
            PathBuf::from("/home/me/context")
        );
    }

    #[test]
    fn expand_home_leaves_other_paths() {
        let home = Path::new("/home/me");
        assert_eq!(
            expand_home_with("/data/ctx", Some(home)),
            PathBuf::from("/data/ctx")
        );
        assert_eq!(
            expand_home_with("~other/x", Some(home)),
            PathBuf::from("~other/x")
        );
    }

    #[test]
    fn expand_home_without_home_is_identity() {
        assert_eq!(expand_home_with("~/x", None), PathBuf::from("~/x"));
    }
}
