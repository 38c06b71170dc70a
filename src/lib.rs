//! ezmd - documents and arXiv papers to Markdown, synced to your machines
//!
//! ezmd fetches a document (URL, arXiv id or local file), stages it under
//! `<base>/raw/`, converts it to Markdown with an external engine (optionally
//! describing images with an LLM provider), and pushes the result to
//! configured rsync remotes.
//!
//! ## Layers
//!
//! - `domain` - entities, pure services and ports
//! - `application` - convert, sync and remote-management use cases
//! - `infrastructure` - filesystem, HTTP, rsync, engine and prompt adapters
//! - `presentation` - CLI definition, session wiring, rendering
//! - `ui` - spinner and panel widgets

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

pub use config::Config;
pub use error::{EzmdError, EzmdResult};
