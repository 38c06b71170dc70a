//! Credential Store Port
//!
//! Provider API keys are read and written through an injected store instead
//! of process-wide environment variables.

use crate::domain::value_objects::ProviderId;
use crate::error::EzmdResult;

/// Get/set/clear access to provider secrets.
pub trait CredentialStore: Send + Sync {
    /// Secret for a provider, if one is stored.
    fn get(&self, provider: &ProviderId) -> Option<String>;

    /// Store (or replace) the secret for a provider.
    fn set(&self, provider: &ProviderId, secret: &str) -> EzmdResult<()>;

    /// Forget the secret for a provider.
    fn clear(&self, provider: &ProviderId) -> EzmdResult<()>;

    /// Whether a non-empty secret is available.
    fn has(&self, provider: &ProviderId) -> bool {
        self.get(provider).is_some_and(|s| !s.trim().is_empty())
    }
}
