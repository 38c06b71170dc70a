//! Domain Layer
//!
//! Pure business logic for ezmd without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - ConversionRequest, RemoteTarget/RemoteSet, SyncOutcome/SyncReport
//! - `value_objects/` - ProviderId, ConfigWarning
//! - `services/` - Source canonicalization, filename sanitization, `_vN` proposals
//! - `ports/` - Interfaces the infrastructure layer implements
//!
//! Everything that touches the network, the filesystem, child processes or
//! the terminal goes through a trait in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
