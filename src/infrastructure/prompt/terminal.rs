//! Terminal prompter
//!
//! Uses dialoguer widgets when both stdin and stderr are terminals and falls
//! back to plain line reads otherwise (pipes, CI, `ezmd < answers.txt`).

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;

pub struct TerminalPrompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stderr().is_terminal(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Never use dialoguer widgets.
    pub fn plain() -> Self {
        Self {
            interactive: false,
            theme: ColorfulTheme::default(),
        }
    }

    fn read_line(prompt: &str) -> Option<String> {
        eprint!("{}: ", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str) -> Option<String> {
        if !self.interactive {
            return Self::read_line(prompt);
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .ok()
            .map(|s| s.trim().to_string())
    }

    fn say(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("[!] {}", message);
    }

    fn select(&self, prompt: &str, items: &[String]) -> Option<usize> {
        if !self.interactive {
            for (i, item) in items.iter().enumerate() {
                self.say(&format!("  {}) {}", i + 1, item));
            }
            loop {
                let answer = Self::read_line(prompt)?;
                match answer.parse::<usize>() {
                    Ok(n) if (1..=items.len()).contains(&n) => return Some(n - 1),
                    _ => self.warn(&format!("Please enter a number from 1 to {}.", items.len())),
                }
            }
        }
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .ok()
            .flatten()
    }
}
