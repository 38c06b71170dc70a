//! Output naming: title sanitization and `_vN` collision proposals

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Default upper bound on sanitized name length, in characters.
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 128;

/// Name used when a title sanitizes to nothing.
pub const FALLBACK_NAME: &str = "untitled";

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("sanitize regex is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Sanitize a free-form title into a filename stem.
///
/// Drops everything except word characters, whitespace and hyphens, turns
/// whitespace runs into single underscores, and truncates to `max_len`
/// characters.
///
/// ```
/// use ezmd::domain::services::sanitize_title;
///
/// assert_eq!(sanitize_title("My Paper!! 2023", 128), "My_Paper_2023");
/// ```
pub fn sanitize_title(title: &str, max_len: usize) -> String {
    let max_len = max_len.max(1);
    let stripped = DISALLOWED.replace_all(title, "");
    let joined = WHITESPACE_RUN.replace_all(stripped.trim(), "_");

    let name = if joined.is_empty() {
        FALLBACK_NAME
    } else {
        joined.as_ref()
    };
    name.chars().take(max_len).collect()
}

/// `<dir>/<stem>_v<n><.ext>` for a given path.
pub fn versioned_path(path: &Path, version: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_v{}.{}", stem, version, ext.to_string_lossy()),
        None => format!("{}_v{}", stem, version),
    };
    path.with_file_name(name)
}

/// First `_vN` path (N starting at 2) for which `exists` is false.
pub fn next_free_version<F>(path: &Path, exists: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut version = 2u32;
    loop {
        let candidate = versioned_path(path, version);
        if !exists(&candidate) || version == u32::MAX {
            return candidate;
        }
        version += 1;
    }
}
