//! Configuration menu
//!
//! Each change is written back immediately through the session's config
//! repository. API keys go to the credential store, never into the config.

use ezmd::domain::value_objects::ProviderId;
use ezmd::presentation::{create_remote_manager, render, Session};
use ezmd::ui::supports_unicode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigAction {
    BaseDir,
    MaxLength,
    ToggleOverwrite,
    DefaultProvider,
    ToggleLlmImages,
    DefaultModel,
    Providers,
    Remotes,
    Back,
}

const CONFIG_ACTIONS: [(ConfigAction, &str); 9] = [
    (ConfigAction::BaseDir, "Set base output directory"),
    (ConfigAction::MaxLength, "Set max filename length"),
    (ConfigAction::ToggleOverwrite, "Toggle overwrite by default"),
    (ConfigAction::DefaultProvider, "Set default LLM provider"),
    (ConfigAction::ToggleLlmImages, "Toggle LLM image descriptions"),
    (ConfigAction::DefaultModel, "Set default model"),
    (ConfigAction::Providers, "Manage providers"),
    (ConfigAction::Remotes, "Manage remotes"),
    (ConfigAction::Back, "Back"),
];

fn labels<T: Copy>(actions: &[(T, &str)]) -> Vec<String> {
    actions.iter().map(|(_, label)| label.to_string()).collect()
}

pub fn config_menu(session: &mut Session) {
    loop {
        session
            .prompter()
            .say(&render::config_panel(&session.config, supports_unicode()));

        let action = session
            .prompter()
            .select("Configuration", &labels(&CONFIG_ACTIONS))
            .map(|i| CONFIG_ACTIONS[i].0)
            .unwrap_or(ConfigAction::Back);

        match action {
            ConfigAction::BaseDir => set_base_dir(session),
            ConfigAction::MaxLength => set_max_length(session),
            ConfigAction::ToggleOverwrite => {
                session.config.force_overwrite_default = !session.config.force_overwrite_default;
                saved(session, "Overwrite by default toggled.");
            }
            ConfigAction::DefaultProvider => set_default_provider(session),
            ConfigAction::ToggleLlmImages => {
                session.config.llm.use_for_images = !session.config.llm.use_for_images;
                saved(session, "LLM image descriptions toggled.");
            }
            ConfigAction::DefaultModel => set_default_model(session),
            ConfigAction::Providers => providers_menu(session),
            ConfigAction::Remotes => remotes_menu(session),
            ConfigAction::Back => return,
        }
    }
}

fn saved(session: &Session, message: &str) {
    if session.save() {
        session.prompter().say(&format!("[+] {}", message));
    }
}

fn set_base_dir(session: &mut Session) {
    let Some(answer) = session.prompter().input(&format!(
        "Base output directory [current={}] (blank to keep)",
        session.config.base_context_dir
    )) else {
        return;
    };
    if answer.is_empty() {
        return;
    }
    session.config.base_context_dir = answer;
    saved(session, "Base output directory updated.");
    if session.config.env.base_context_dir.is_some() {
        session
            .prompter()
            .warn("EZMD_BASE_DIR is set and still takes precedence in this session.");
    }
}

fn set_max_length(session: &mut Session) {
    let Some(answer) = session.prompter().input(&format!(
        "Max filename length [current={}] (blank to keep)",
        session.config.max_filename_length
    )) else {
        return;
    };
    if answer.is_empty() {
        return;
    }
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => {
            session.config.max_filename_length = n;
            saved(session, "Max filename length updated.");
        }
        _ => session
            .prompter()
            .warn(&format!("Not a positive number: {}", answer)),
    }
}

fn set_default_provider(session: &mut Session) {
    let ids: Vec<ProviderId> = session.config.providers.keys().cloned().collect();
    let mut items: Vec<String> = ids.iter().map(ToString::to_string).collect();
    items.push("None".to_string());

    let Some(choice) = session.prompter().select("Default provider", &items) else {
        return;
    };
    let chosen = ids.get(choice).cloned();
    if let Some(id) = &chosen {
        if !session.available_providers().contains(id) {
            session.prompter().warn(&format!(
                "'{}' is not available yet; enable it and store its key to use it.",
                id
            ));
        }
    }
    session.config.default_provider = chosen;
    saved(session, "Default provider updated.");
}

fn set_default_model(session: &mut Session) {
    let Some(answer) = session.prompter().input(&format!(
        "Default model [current={}] (blank to keep)",
        session.config.llm.default_model
    )) else {
        return;
    };
    if answer.is_empty() {
        return;
    }
    session.config.llm.default_model = answer;
    saved(session, "Default model updated.");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProviderAction {
    ToggleEnabled,
    SetKey,
    ClearKey,
    SetModel,
    Back,
}

const PROVIDER_ACTIONS: [(ProviderAction, &str); 5] = [
    (ProviderAction::ToggleEnabled, "Enable / disable"),
    (ProviderAction::SetKey, "Set API key"),
    (ProviderAction::ClearKey, "Clear API key"),
    (ProviderAction::SetModel, "Set model"),
    (ProviderAction::Back, "Back"),
];

fn providers_menu(session: &mut Session) {
    loop {
        let ids: Vec<ProviderId> = session.config.providers.keys().cloned().collect();
        let mut items: Vec<String> = ids
            .iter()
            .map(|id| render::provider_line(&session.config, id, session.credentials.has(id)))
            .collect();
        items.push("Add a provider".to_string());
        items.push("Back".to_string());

        let Some(choice) = session.prompter().select("Providers", &items) else {
            return;
        };
        match ids.get(choice) {
            Some(id) => provider_actions(session, id),
            None if choice == ids.len() => add_provider(session),
            None => return,
        }
    }
}

fn add_provider(session: &mut Session) {
    let Some(name) = session.prompter().input("Provider id (e.g. 'anthropic')") else {
        return;
    };
    if name.is_empty() {
        return;
    }
    let id = ProviderId::new(&name);
    if session.config.providers.contains_key(&id) {
        session
            .prompter()
            .warn(&format!("Provider '{}' already exists.", id));
        return;
    }
    session.config.set_provider_enabled(&id, false);
    saved(session, &format!("Provider '{}' added (disabled).", id));
}

fn provider_actions(session: &mut Session, id: &ProviderId) {
    let Some(choice) = session
        .prompter()
        .select(&format!("Provider '{}'", id), &labels(&PROVIDER_ACTIONS))
    else {
        return;
    };

    match PROVIDER_ACTIONS[choice].0 {
        ProviderAction::ToggleEnabled => {
            let enabled = session.config.provider(id).is_some_and(|p| p.enabled);
            session.config.set_provider_enabled(id, !enabled);
            let state = if enabled { "disabled" } else { "enabled" };
            saved(session, &format!("Provider '{}' {}.", id, state));
        }
        ProviderAction::SetKey => {
            let Some(key) = session.prompter().input(&format!("API key for {}", id)) else {
                return;
            };
            if key.is_empty() {
                session.prompter().warn("Empty key ignored.");
                return;
            }
            match session.credentials.set(id, &key) {
                Ok(()) => session
                    .prompter()
                    .say(&format!("[+] API key for '{}' stored.", id)),
                Err(e) => session.prompter().warn(&e.to_string()),
            }
        }
        ProviderAction::ClearKey => match session.credentials.clear(id) {
            Ok(()) => session
                .prompter()
                .say(&format!("[+] API key for '{}' cleared.", id)),
            Err(e) => session.prompter().warn(&e.to_string()),
        },
        ProviderAction::SetModel => {
            let Some(model) = session.prompter().input(&format!(
                "Model for {} [current={}] (blank to keep)",
                id,
                session.config.model_for(id)
            )) else {
                return;
            };
            if model.is_empty() {
                return;
            }
            if let Some(entry) = session.config.providers.get_mut(id) {
                entry.default_model = Some(model);
            }
            saved(session, &format!("Model for '{}' updated.", id));
        }
        ProviderAction::Back => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoteAction {
    Add,
    Edit,
    Remove,
    Back,
}

const REMOTE_ACTIONS: [(RemoteAction, &str); 4] = [
    (RemoteAction::Add, "Add remote"),
    (RemoteAction::Edit, "Edit remote"),
    (RemoteAction::Remove, "Remove remote"),
    (RemoteAction::Back, "Back"),
];

pub(crate) fn remotes_menu(session: &mut Session) {
    loop {
        for line in render::remote_lines(&session.config.remotes) {
            session.prompter().say(&line);
        }

        let action = session
            .prompter()
            .select("Remotes", &labels(&REMOTE_ACTIONS))
            .map(|i| REMOTE_ACTIONS[i].0)
            .unwrap_or(RemoteAction::Back);
        if action == RemoteAction::Back {
            return;
        }

        let manager = create_remote_manager(session.transfer.as_ref(), &session.config);
        let prompter = session.prompter.as_ref();
        let remotes = &mut session.config.remotes;
        let change = match action {
            RemoteAction::Add => manager.add(remotes, prompter),
            RemoteAction::Edit => manager.edit(remotes, prompter),
            RemoteAction::Remove => manager.remove(remotes, prompter),
            RemoteAction::Back => None,
        };

        if let Some(change) = change {
            tracing::info!(alias = change.alias(), change = ?change, "remotes changed");
            session.save();
        }
    }
}
