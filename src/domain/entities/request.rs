//! Conversion request entity

use std::path::PathBuf;

use crate::domain::value_objects::ProviderId;

/// A single "convert this document" request as entered by the user.
///
/// Built once in the convert flow and never mutated after acquisition starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub title: String,
    /// URL, arXiv identifier, or local filesystem path
    pub source: String,
    /// Provider explicitly chosen for this request (`None` = no LLM)
    pub provider: Option<ProviderId>,
    /// Overwrite existing files instead of resolving collisions
    pub overwrite: bool,
}

impl ConversionRequest {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            provider: None,
            overwrite: false,
        }
    }

    pub fn with_provider(mut self, provider: Option<ProviderId>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Staging and output locations for one request.
///
/// Both paths are free of collisions unless the request asked to overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Where the raw download/copy lands (`<base>/raw/<name><ext>`)
    pub staging_path: PathBuf,
    /// Where the Markdown goes (`<base>/<name>.md`)
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let req = ConversionRequest::new("Paper", "2306.02564")
            .with_provider(Some(ProviderId::openai()))
            .with_overwrite(true);
        assert_eq!(req.title, "Paper");
        assert_eq!(req.provider, Some(ProviderId::openai()));
        assert!(req.overwrite);
    }

    #[test]
    fn defaults_to_no_provider_and_no_overwrite() {
        let req = ConversionRequest::new("Paper", "/tmp/a.pdf");
        assert!(req.provider.is_none());
        assert!(!req.overwrite);
    }
}
