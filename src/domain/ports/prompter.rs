//! Prompter Port
//!
//! Every interactive decision (collision handling, provider choice, sync
//! selection, remote management) goes through this trait so orchestration
//! can be driven by a scripted implementation in tests.

/// Line-based prompt/response channel to the user.
pub trait Prompter: Send + Sync {
    /// Ask for a line of input. Returns the trimmed answer, or `None` when
    /// input has ended (EOF / closed terminal).
    fn input(&self, prompt: &str) -> Option<String>;

    /// Print an informational line.
    fn say(&self, message: &str);

    /// Print a warning line.
    fn warn(&self, message: &str);

    /// Yes/no question. Blank input takes `default`; end of input is "no".
    fn confirm(&self, prompt: &str, default: bool) -> bool {
        let hint = if default { "Y/n" } else { "y/N" };
        match self.input(&format!("{} ({})", prompt, hint)) {
            None => false,
            Some(answer) if answer.is_empty() => default,
            Some(answer) => parse_yes(&answer),
        }
    }

    /// Pick one of `items`; `None` when input ends.
    ///
    /// The default lists the items with 1-based numbers and reads a number,
    /// re-asking on anything out of range.
    fn select(&self, prompt: &str, items: &[String]) -> Option<usize> {
        for (i, item) in items.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, item));
        }
        loop {
            let answer = self.input(prompt)?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Some(n - 1),
                _ => self.warn(&format!("Please enter a number from 1 to {}.", items.len())),
            }
        }
    }
}

/// `y`, `yes`, `Y`... count as yes; anything else is no.
pub fn parse_yes(answer: &str) -> bool {
    answer.trim().to_ascii_lowercase().starts_with('y')
}
