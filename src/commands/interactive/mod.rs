//! Interactive command module
//!
//! `ezmd` with no subcommand: first-run wizard when no config file exists,
//! then the main menu until the user exits.

mod config_menu;
mod convert_flow;
mod menu;
mod wizard;

use anyhow::Result;

use ezmd::presentation::Session;

pub fn cmd_interactive(session: &mut Session) -> Result<()> {
    if !session.config_exists() {
        wizard::setup_wizard(session);
    }
    menu::main_menu(session);
    Ok(())
}
