//! Error types for ezmd
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ezmd operations
pub type EzmdResult<T> = Result<T, EzmdError>;

/// Main error type for ezmd operations
///
/// Per-target transfer failures are not part of this enum: they are recorded
/// as [`crate::domain::entities::SyncOutcome`]s and never abort a request.
#[derive(Error, Debug)]
pub enum EzmdError {
    /// The user cancelled a collision prompt; the whole request is aborted
    #[error("user cancelled the job due to a collision at {path}")]
    UserCancelled { path: PathBuf },

    /// Network or filesystem fetch failed
    #[error("failed to retrieve '{reference}': {reason}")]
    Retrieval { reference: String, reason: String },

    /// The external conversion engine failed
    #[error("conversion of {input} failed: {reason}")]
    Conversion { input: PathBuf, reason: String },

    /// Configuration could not be read, parsed, or written
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Credential storage failed
    #[error("credential store error: {0}")]
    Credential(String),

    /// A remote with this alias is already configured
    #[error("remote alias '{0}' already exists")]
    DuplicateAlias(String),

    /// Remote alias must not be empty
    #[error("remote alias must not be empty")]
    EmptyAlias,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EzmdError {
    /// Convenience constructor for retrieval failures.
    pub fn retrieval(reference: impl Into<String>, reason: impl ToString) -> Self {
        Self::Retrieval {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }

    /// Convenience constructor for conversion failures.
    pub fn conversion(input: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Conversion {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from the user backing out rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_user_cancelled() {
        let err = EzmdError::UserCancelled {
            path: PathBuf::from("/ctx/raw/paper.pdf"),
        };
        assert_eq!(
            err.to_string(),
            "user cancelled the job due to a collision at /ctx/raw/paper.pdf"
        );
        assert!(err.is_cancellation());
    }

    #[test]
    fn test_error_display_retrieval() {
        let err = EzmdError::retrieval("https://example.com/a.pdf", "HTTP 404 Not Found");
        assert_eq!(
            err.to_string(),
            "failed to retrieve 'https://example.com/a.pdf': HTTP 404 Not Found"
        );
        assert!(!err.is_cancellation());
    }

    #[test]
    fn test_error_display_duplicate_alias() {
        let err = EzmdError::DuplicateAlias("laptop".to_string());
        assert_eq!(err.to_string(), "remote alias 'laptop' already exists");
    }
}
