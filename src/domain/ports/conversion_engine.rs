//! Conversion Engine Port
//!
//! The document-to-Markdown engine is a black box: give it a file, get text.

use std::fmt;
use std::path::Path;

use crate::domain::value_objects::ProviderId;
use crate::error::EzmdResult;

/// LLM capability handed to the engine for image descriptions.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmAttachment {
    pub provider: ProviderId,
    pub model: String,
    pub api_key: String,
}

impl fmt::Debug for LlmAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmAttachment")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// External document-to-Markdown engine.
pub trait ConversionEngine: Send + Sync {
    /// Engine name for logging
    fn name(&self) -> &str;

    /// Convert the file at `input`, returning the extracted Markdown text.
    ///
    /// Failures are reported as [`crate::EzmdError::Conversion`].
    fn convert(&self, input: &Path, llm: Option<&LlmAttachment>) -> EzmdResult<String>;
}
