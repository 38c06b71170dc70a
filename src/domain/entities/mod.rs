//! Domain Entities
//!
//! Core business objects: the conversion request, remote targets, and sync outcomes.

mod remote;
mod request;
mod sync_outcome;

pub use remote::{RemoteSet, RemoteTarget, MISSING_FIELD};
pub use request::{ConversionRequest, ResolvedPaths};
pub use sync_outcome::{SyncOutcome, SyncReport};
