//! First-run setup wizard
//!
//! Runs when no config file exists yet. Every question has a default, so
//! pressing Enter throughout (or closing input) still writes a usable config.

use ezmd::domain::value_objects::ProviderId;
use ezmd::infrastructure::fs::display_with_tilde;
use ezmd::presentation::{create_remote_manager, Session};

pub fn setup_wizard(session: &mut Session) {
    session
        .prompter()
        .say("Welcome to ezmd! No configuration found, let's create one.");

    ask_base_dir(session);
    ask_max_length(session);
    session.config.force_overwrite_default = session
        .prompter()
        .confirm("Overwrite existing files by default?", false);
    ask_providers(session);
    ask_default_provider(session);

    if session.save() {
        session.prompter().say(&format!(
            "[+] Configuration saved to {}",
            display_with_tilde(&session.repo.path())
        ));
    }

    if session
        .prompter()
        .confirm("Configure a remote for syncing now?", false)
    {
        let manager = create_remote_manager(session.transfer.as_ref(), &session.config);
        let prompter = session.prompter.as_ref();
        if manager.add(&mut session.config.remotes, prompter).is_some() {
            session.save();
        }
    }
}

fn ask_base_dir(session: &mut Session) {
    let answer = session.prompter().input(&format!(
        "Base output directory [{}]",
        session.config.base_context_dir
    ));
    if let Some(dir) = answer.filter(|a| !a.is_empty()) {
        session.config.base_context_dir = dir;
    }
}

fn ask_max_length(session: &mut Session) {
    let answer = session.prompter().input(&format!(
        "Maximum filename length [{}]",
        session.config.max_filename_length
    ));
    let Some(answer) = answer.filter(|a| !a.is_empty()) else {
        return;
    };
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => session.config.max_filename_length = n,
        _ => session.prompter().warn(&format!(
            "Not a positive number: {}; keeping {}",
            answer, session.config.max_filename_length
        )),
    }
}

fn ask_providers(session: &mut Session) {
    let ids: Vec<ProviderId> = session.config.providers.keys().cloned().collect();
    for id in ids {
        let enable = session
            .prompter()
            .confirm(&format!("Enable {} for image descriptions?", id), false);
        session.config.set_provider_enabled(&id, enable);
        if !enable || session.credentials.has(&id) {
            continue;
        }

        let key = session
            .prompter()
            .input(&format!("API key for {} (blank to skip)", id));
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            continue;
        };
        if let Err(e) = session.credentials.set(&id, &key) {
            session.prompter().warn(&e.to_string());
        }
    }
}

fn ask_default_provider(session: &mut Session) {
    let available = session.available_providers();
    if available.is_empty() {
        return;
    }

    let mut items: Vec<String> = available.iter().map(ToString::to_string).collect();
    items.push("None".to_string());
    if let Some(choice) = session.prompter().select("Default provider", &items) {
        session.config.default_provider = available.get(choice).cloned();
    }
}
