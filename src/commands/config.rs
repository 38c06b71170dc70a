//! `ezmd config` subcommands

use anyhow::{Context, Result};

use ezmd::presentation::Session;

pub fn cmd_config_path(session: &Session) -> Result<()> {
    println!("{}", session.repo.path().display());
    Ok(())
}

/// Print the configuration as it would be saved.
///
/// `EZMD_*` overrides are not part of the saved form; they are listed after
/// it when set.
pub fn cmd_config_show(session: &Session) -> Result<()> {
    let rendered =
        toml::to_string_pretty(&session.config).context("Failed to serialize configuration")?;
    print!("{}", rendered);

    let env = &session.config.env;
    if let Some(dir) = &env.base_context_dir {
        println!("# EZMD_BASE_DIR = {}", dir);
    }
    if let Some(len) = env.max_filename_length {
        println!("# EZMD_MAX_FILENAME_LENGTH = {}", len);
    }
    if let Some(secs) = env.sync_timeout_secs {
        println!("# EZMD_SYNC_TIMEOUT = {}", secs);
    }
    Ok(())
}
