//! Use Case Factory
//!
//! Creates the session and use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ConvertUseCase, RemoteManager, SyncOrchestrator};
use crate::config::Config;
use crate::domain::ports::TransferStrategy;
use crate::error::EzmdResult;
use crate::infrastructure::{
    CommandEngine, EnvFileCredentialStore, HttpFetcher, RsyncTransfer, TerminalPrompter,
    TomlConfigRepository,
};

use super::session::{load_config, Session, SessionDeps};

/// Create a session backed by the real config file, secrets file, rsync,
/// the engine command and the terminal.
///
/// The HTTP client and engine are built from the loaded config, so the
/// config is read before anything else.
pub fn create_session(animate: bool) -> EzmdResult<Session> {
    let repo = TomlConfigRepository::new();
    let prompter = TerminalPrompter::new();
    let config = load_config(&repo, &prompter);

    let deps = SessionDeps {
        fetcher: Box::new(HttpFetcher::new(config.http_timeout())?),
        engine: Box::new(CommandEngine::from_config(&config.engine)),
        transfer: Box::new(RsyncTransfer::new()),
        credentials: Box::new(EnvFileCredentialStore::new()),
        repo: Box::new(repo),
        prompter: Box::new(prompter),
    };

    Ok(Session::new(config, deps).with_animation(animate))
}

/// Convert use case over the session's fetcher, engine and credentials.
pub fn create_convert_use_case(session: &Session) -> ConvertUseCase<'_> {
    ConvertUseCase::new(
        session.fetcher.as_ref(),
        session.engine.as_ref(),
        session.credentials.as_ref(),
    )
}

/// Sync orchestrator with the configured per-transfer deadline and page size.
pub fn create_sync_orchestrator<'a>(
    transfer: &'a dyn TransferStrategy,
    config: &Config,
) -> SyncOrchestrator<'a> {
    SyncOrchestrator::new(transfer)
        .with_timeout(config.sync_timeout())
        .with_page_size(config.page_size())
}

/// Remote manager probing with the sync deadline.
///
/// Takes the transfer rather than the session so callers can hold
/// `&mut session.config.remotes` at the same time.
pub fn create_remote_manager<'a>(
    transfer: &'a dyn TransferStrategy,
    config: &Config,
) -> RemoteManager<'a> {
    RemoteManager::new(transfer, config.sync_timeout())
}
