//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConvertUseCase` - canonicalize, resolve paths, fetch, convert, write
//! - `SyncOrchestrator` - auto-sync, optional selection, per-remote transfer
//! - `RemoteManager` - add / edit / remove remotes with a connectivity probe
//!
//! ## Services
//!
//! - `resolve_collision` - interactive `_vN` collision handling

pub mod collision;
pub mod convert;
pub mod remotes;
pub mod sync;

pub use collision::{resolve_collision, resolve_collision_with};
pub use convert::{ConvertOutcome, ConvertUseCase, PreparedConversion};
pub use remotes::{RemoteChange, RemoteManager, DEFAULT_REMOTE_DIR};
pub use sync::{parse_selection, SyncOrchestrator, DEFAULT_PAGE_SIZE, DEFAULT_SYNC_TIMEOUT};
