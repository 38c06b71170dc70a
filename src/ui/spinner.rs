//! Progress spinner
//!
//! Runs on an auxiliary thread while a blocking phase (download, conversion)
//! executes on the caller's thread. The thread is stopped and joined before
//! [`with_spinner`] returns, so it never outlives the work it decorates.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{cursor, execute, terminal};

const SPINNER_FRAMES_BRAILLE: &[char] = &[
    '⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏',
];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Frame `tick` of the animation.
pub fn frame(tick: usize, supports_unicode: bool) -> char {
    let frames = if supports_unicode {
        SPINNER_FRAMES_BRAILLE
    } else {
        SPINNER_FRAMES_ASCII
    };
    frames[tick % frames.len()]
}

/// One rendered spinner line, without the leading carriage return.
pub fn render_line(tick: usize, message: &str, supports_unicode: bool) -> String {
    format!("{} {}", frame(tick, supports_unicode), message)
}

/// A running spinner. Dropping it stops the thread.
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start animating `message` on stderr.
    ///
    /// With `enabled == false` nothing is drawn and no thread is spawned.
    pub fn start(message: impl Into<String>, enabled: bool, supports_unicode: bool) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        if !enabled {
            return Self { stop, handle: None };
        }

        let message = message.into();
        let flag = Arc::clone(&stop);
        let spawned = thread::Builder::new()
            .name("ezmd-spinner".into())
            .spawn(move || {
                let mut stderr = io::stderr();
                let _ = execute!(stderr, cursor::Hide);
                let mut tick = 0usize;
                while !flag.load(Ordering::Relaxed) {
                    let _ = write!(stderr, "\r{}", render_line(tick, &message, supports_unicode));
                    let _ = stderr.flush();
                    tick = tick.wrapping_add(1);
                    thread::sleep(FRAME_INTERVAL);
                }
                let _ = execute!(
                    stderr,
                    cursor::MoveToColumn(0),
                    terminal::Clear(terminal::ClearType::CurrentLine),
                    cursor::Show
                );
            });

        Self::from_spawn(stop, spawned)
    }

    /// A spinner that could not get its thread simply does not animate.
    fn from_spawn(stop: Arc<AtomicBool>, spawned: io::Result<JoinHandle<()>>) -> Self {
        match spawned {
            Ok(handle) => Self {
                stop,
                handle: Some(handle),
            },
            Err(e) => {
                tracing::debug!(error = %e, "spinner thread not started");
                Self { stop, handle: None }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Signal the thread and wait for it to clear its line.
    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::debug!("spinner thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Run `work` with a spinner showing `message`; the spinner is gone when this returns.
pub fn with_spinner<T>(message: &str, enabled: bool, work: impl FnOnce() -> T) -> T {
    let spinner = Spinner::start(message, enabled, supports_unicode());
    let result = work();
    spinner.stop();
    result
}

/// Whether stderr is a terminal that can show the animation.
pub fn spinner_enabled() -> bool {
    use is_terminal::IsTerminal;
    io::stderr().is_terminal() && std::env::var_os("CI").is_none()
}

/// UTF-8 locale check, as `LC_ALL` > `LC_CTYPE` > `LANG`.
pub fn supports_unicode() -> bool {
    supports_unicode_with(|key| std::env::var(key).ok())
}

fn supports_unicode_with(get_env: impl Fn(&str) -> Option<String>) -> bool {
    if get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb")) {
        return false;
    }
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()))
        .map(|locale| {
            let locale = locale.to_ascii_lowercase();
            locale.contains("utf-8") || locale.contains("utf8")
        })
        .unwrap_or(cfg!(windows))
}
