//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_repository;
pub mod conversion_engine;
pub mod credential_store;
pub mod prompter;
pub mod source_fetcher;
pub mod transfer;

pub use config_repository::ConfigRepository;
pub use conversion_engine::{ConversionEngine, LlmAttachment};
pub use credential_store::CredentialStore;
pub use prompter::{parse_yes, Prompter};
pub use source_fetcher::SourceFetcher;
pub use transfer::{remote_spec, TransferError, TransferStrategy};
