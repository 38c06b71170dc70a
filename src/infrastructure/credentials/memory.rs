//! In-memory credential store

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ports::CredentialStore;
use crate::domain::value_objects::ProviderId;
use crate::error::EzmdResult;

/// Credential store backed by a map; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    secrets: Mutex<HashMap<ProviderId, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(self, provider: ProviderId, secret: impl Into<String>) -> Self {
        if let Ok(mut map) = self.secrets.lock() {
            map.insert(provider, secret.into());
        }
        self
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, provider: &ProviderId) -> Option<String> {
        self.secrets
            .lock()
            .ok()
            .and_then(|map| map.get(provider).cloned())
    }

    fn set(&self, provider: &ProviderId, secret: &str) -> EzmdResult<()> {
        if let Ok(mut map) = self.secrets.lock() {
            map.insert(provider.clone(), secret.to_string());
        }
        Ok(())
    }

    fn clear(&self, provider: &ProviderId) -> EzmdResult<()> {
        if let Ok(mut map) = self.secrets.lock() {
            map.remove(provider);
        }
        Ok(())
    }
}
