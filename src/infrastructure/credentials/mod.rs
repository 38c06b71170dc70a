//! Credential store implementations

mod env_file;
mod memory;

pub use env_file::{EnvFileCredentialStore, SECRETS_FILE_NAME};
pub use memory::InMemoryCredentialStore;
