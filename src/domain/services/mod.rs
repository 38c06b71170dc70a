//! Domain Services
//!
//! Pure functions over strings and paths: source canonicalization, output
//! naming, and Windows path translation. No I/O happens here; filesystem
//! checks are passed in as predicates.

mod canonicalizer;
mod naming;
mod windows_path;

pub use canonicalizer::{
    canonicalize, infer_extension, is_url, resolve_source, CanonicalSource, FALLBACK_EXTENSION,
};
pub use naming::{
    next_free_version, sanitize_title, versioned_path, DEFAULT_MAX_FILENAME_LENGTH, FALLBACK_NAME,
};
pub use windows_path::{is_windows_path, translate_windows_path};
