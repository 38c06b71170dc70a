//! Provider value object - identifies an LLM provider used for image descriptions
//!
//! Providers are open-ended: the two built-in ids ship with defaults, but any
//! `[providers.<id>]` table in the config defines another one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an LLM provider (e.g. `openai`, `google_gemini`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub const OPENAI: &'static str = "openai";
    pub const GOOGLE_GEMINI: &'static str = "google_gemini";

    /// Create a provider id. Ids are normalized to trimmed lowercase.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_ascii_lowercase())
    }

    pub fn openai() -> Self {
        Self::new(Self::OPENAI)
    }

    pub fn google_gemini() -> Self {
        Self::new(Self::GOOGLE_GEMINI)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which the secret is persisted (`EZMD_<ID>_KEY`).
    pub fn secret_key(&self) -> String {
        let upper: String = self
            .0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("EZMD_{}_KEY", upper)
    }

    /// Environment variable the provider's own SDKs read, if there is a well-known one.
    pub fn conventional_key_var(&self) -> Option<&'static str> {
        match self.0.as_str() {
            Self::OPENAI => Some("OPENAI_API_KEY"),
            Self::GOOGLE_GEMINI => Some("GEMINI_API_KEY"),
            _ => None,
        }
    }

    /// Model used when the config does not name one.
    pub fn builtin_default_model(&self) -> Option<&'static str> {
        match self.0.as_str() {
            Self::OPENAI => Some("gpt-4"),
            Self::GOOGLE_GEMINI => Some("gemini-2.0-flash-exp"),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
