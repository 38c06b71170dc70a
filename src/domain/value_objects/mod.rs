//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod provider;

pub use config_warning::ConfigWarning;
pub use provider::ProviderId;
