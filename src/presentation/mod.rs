//! Presentation Layer
//!
//! CLI definition, session wiring and text rendering shared by the
//! binary's commands.

pub mod cli;
pub mod factory;
pub mod render;
pub mod session;

pub use cli::{overwrite_choice, Cli, Commands, ConfigCommand, RemotesCommand};
pub use factory::{
    create_convert_use_case, create_remote_manager, create_session, create_sync_orchestrator,
};
pub use session::{load_config, Session, SessionDeps};
