//! Source reference canonicalization
//!
//! Turns whatever the user typed (arXiv id, abstract link, URL, local path)
//! into a fetchable reference plus a file extension guess. Pure string work:
//! no network, no filesystem.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::windows_path::{is_windows_path, translate_windows_path};

/// Fallback extension when nothing better can be inferred.
pub const FALLBACK_EXTENSION: &str = ".bin";

const ARXIV_HOST: &str = "arxiv.org";
const ARXIV_PDF_PREFIX: &str = "https://arxiv.org/pdf/";

static ARXIV_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}\.\d{4,5}(v\d+)?$").expect("arXiv id regex is valid"));

/// A source reference after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSource {
    /// URL or local path to fetch from
    pub reference: String,
    /// Extension including the leading dot, e.g. `.pdf`
    pub extension: String,
}

impl CanonicalSource {
    pub fn is_remote(&self) -> bool {
        is_url(&self.reference)
    }
}

/// Canonicalize and infer the extension in one step.
///
/// Windows drive paths are translated to their `/mnt/<drive>/` form first.
pub fn resolve_source(raw: &str) -> CanonicalSource {
    let trimmed = raw.trim();
    let reference = if !is_url(trimmed) && is_windows_path(trimmed) {
        translate_windows_path(trimmed)
    } else {
        canonicalize(trimmed)
    };
    let extension = infer_extension(&reference);
    CanonicalSource {
        reference,
        extension,
    }
}

/// Whether the reference is fetched over HTTP(S).
pub fn is_url(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Rewrite arXiv references to the canonical PDF link; everything else is
/// returned trimmed.
///
/// Idempotent: every rewritten value is itself a canonical PDF link, which is
/// left alone on the next pass.
pub fn canonicalize(raw: &str) -> String {
    let source = raw.trim();

    if ARXIV_ID.is_match(source) {
        return arxiv_pdf_url(source);
    }

    if !source.contains(ARXIV_HOST) || is_canonical_arxiv_pdf(source) {
        return source.to_string();
    }

    let id = if let Some((_, rest)) = source.split_once("/abs/") {
        rest
    } else if let Some((_, rest)) = source.split_once("/pdf/") {
        rest
    } else if let Some((_, rest)) = source.split_once(ARXIV_HOST) {
        rest
    } else {
        return source.to_string();
    };

    match clean_identifier(id) {
        Some(id) => arxiv_pdf_url(id),
        None => source.to_string(),
    }
}

/// Guess the file extension for a (canonical) reference.
pub fn infer_extension(reference: &str) -> String {
    if is_canonical_arxiv_pdf(reference) {
        return ".pdf".to_string();
    }

    let path_part = if is_url(reference) {
        url_path(reference)
    } else {
        reference
    };

    Path::new(path_part)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

fn is_canonical_arxiv_pdf(reference: &str) -> bool {
    reference.contains("arxiv.org/pdf/") && reference.ends_with(".pdf")
}

fn arxiv_pdf_url(id: &str) -> String {
    format!("{}{}.pdf", ARXIV_PDF_PREFIX, id)
}

/// Strip query, fragment, slashes and a `.pdf` suffix from an identifier tail.
fn clean_identifier(raw: &str) -> Option<&str> {
    let id = raw.split(['?', '#']).next().unwrap_or_default();
    let id = id.trim_matches('/');
    let id = id.strip_suffix(".pdf").unwrap_or(id);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Path component of a URL, without query or fragment.
fn url_path(url: &str) -> &str {
    let after_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let without_query = after_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    match without_query.find('/') {
        Some(idx) => &without_query[idx..],
        None => "",
    }
}
