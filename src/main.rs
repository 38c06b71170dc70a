//! ezmd CLI - convert documents to Markdown and sync them to remotes
//!
//! Usage: ezmd [COMMAND]
//!
//! Commands:
//!   convert  Convert one document to Markdown
//!   remotes  Inspect configured remotes
//!   config   Inspect the configuration
//!
//! Without a command, the interactive menu opens.

mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ezmd::presentation::{
    create_session, overwrite_choice, Cli, Commands, ConfigCommand, RemotesCommand,
};

/// Exit status after Ctrl-C, as shells report SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let _ = crossterm::execute!(io::stderr(), crossterm::cursor::Show);
        eprintln!("\nExiting...");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    install_interrupt_handler();

    let mut session = create_session(!cli.no_animation)?;

    match cli.command {
        None => commands::interactive::cmd_interactive(&mut session),
        Some(Commands::Convert {
            title,
            source,
            provider,
            overwrite,
            no_overwrite,
            no_sync,
        }) => commands::convert::cmd_convert(
            &session,
            &title,
            &source,
            provider.as_deref(),
            overwrite_choice(overwrite, no_overwrite),
            no_sync,
        ),
        Some(Commands::Remotes {
            action: RemotesCommand::List,
        }) => commands::remotes::cmd_remotes_list(&session),
        Some(Commands::Config { action }) => match action {
            ConfigCommand::Path => commands::config::cmd_config_path(&session),
            ConfigCommand::Show => commands::config::cmd_config_show(&session),
        },
    }
}
