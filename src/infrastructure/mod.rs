//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Home/config directory resolution, atomic writes
//! - `config/` - TOML config repository
//! - `credentials/` - Secrets file and in-memory credential stores
//! - `engine/` - External-command conversion engine
//! - `fetch` - HTTP download / local copy
//! - `sync/` - rsync transfer with deadline
//! - `prompt/` - Terminal and scripted prompters

pub mod config;
pub mod credentials;
pub mod engine;
pub mod fetch;
pub mod fs;
pub mod prompt;
pub mod sync;

pub use config::TomlConfigRepository;
pub use credentials::{EnvFileCredentialStore, InMemoryCredentialStore};
pub use engine::CommandEngine;
pub use fetch::HttpFetcher;
pub use prompt::{ScriptedPrompter, TerminalPrompter};
pub use sync::RsyncTransfer;
