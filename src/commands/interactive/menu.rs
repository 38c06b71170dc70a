//! Main menu loop

use ezmd::infrastructure::fs::display_with_tilde;
use ezmd::presentation::Session;
use ezmd::ui::{supports_unicode, Panel};

use super::config_menu::config_menu;
use super::convert_flow::convert_flow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainAction {
    Convert,
    Configure,
    Exit,
}

const MAIN_ACTIONS: [(MainAction, &str); 3] = [
    (MainAction::Convert, "Convert a document"),
    (MainAction::Configure, "Configuration"),
    (MainAction::Exit, "Exit"),
];

fn banner(session: &Session) -> String {
    let mut panel = Panel::with_title(format!("ezmd {}", env!("CARGO_PKG_VERSION")));
    panel.add_line(format!(
        "Output: {}",
        display_with_tilde(&session.config.base_dir())
    ));
    panel.add_line(format!("Remotes: {}", session.config.remotes.len()));
    panel.render(supports_unicode())
}

fn choose_action(session: &Session) -> MainAction {
    let items: Vec<String> = MAIN_ACTIONS.iter().map(|(_, label)| label.to_string()).collect();
    session
        .prompter()
        .select("Choose an option", &items)
        .map(|i| MAIN_ACTIONS[i].0)
        .unwrap_or(MainAction::Exit)
}

/// Loop until Exit or end of input.
pub fn main_menu(session: &mut Session) {
    loop {
        session.prompter().say(&banner(session));
        match choose_action(session) {
            MainAction::Convert => {
                convert_flow(session);
            }
            MainAction::Configure => config_menu(session),
            MainAction::Exit => {
                session.prompter().say("Exiting...");
                return;
            }
        }
    }
}
