//! Windows drive path translation (`C:\x` to `/mnt/c/x`)

use once_cell::sync::Lazy;
use regex::Regex;

static DRIVE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]):\\(.*)$").expect("drive path regex is valid"));

/// `X:\...` style path. UNC paths are not recognized.
pub fn is_windows_path(path: &str) -> bool {
    DRIVE_PATH.is_match(path)
}

/// Translate a drive path to its WSL mount path; other input is returned as-is.
pub fn translate_windows_path(path: &str) -> String {
    match DRIVE_PATH.captures(path) {
        Some(caps) => {
            let drive = caps[1].to_ascii_lowercase();
            let rest = caps[2].replace('\\', "/");
            format!("/mnt/{}/{}", drive, rest)
        }
        None => path.to_string(),
    }
}
