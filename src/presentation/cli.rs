//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `ezmd` with no subcommand opens the interactive menu
//! - `--verbose` and `--no-animation` are global and inherited by all subcommands

use clap::{Parser, Subcommand};

/// ezmd - convert documents and arXiv papers to Markdown and sync them to remotes
#[derive(Parser, Debug)]
#[command(name = "ezmd")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'ezmd' without arguments for the interactive menu.")]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one document to Markdown
    Convert {
        /// Title used to name the output file
        #[arg(short, long)]
        title: String,

        /// URL, arXiv id or local path
        #[arg(short, long)]
        source: String,

        /// LLM provider for image descriptions (must be enabled and have a key)
        #[arg(short, long)]
        provider: Option<String>,

        /// Overwrite existing files instead of proposing a _vN name
        /// (defaults to `force_overwrite_default` from the config)
        #[arg(long, overrides_with = "no_overwrite")]
        overwrite: bool,

        /// Propose a _vN name even when the config defaults to overwriting
        #[arg(long, overrides_with = "overwrite")]
        no_overwrite: bool,

        /// Skip auto-sync and the sync prompts
        #[arg(long)]
        no_sync: bool,
    },

    /// Inspect configured remotes
    Remotes {
        #[command(subcommand)]
        action: RemotesCommand,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotesCommand {
    /// List remotes with their destination and auto-sync flag
    List,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}

/// `--overwrite` / `--no-overwrite` as an explicit choice; `None` defers to
/// the config default.
pub fn overwrite_choice(overwrite: bool, no_overwrite: bool) -> Option<bool> {
    match (overwrite, no_overwrite) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
