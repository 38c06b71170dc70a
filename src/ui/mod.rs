//! Terminal widgets shared by the interactive commands.

pub mod panel;
pub mod spinner;

pub use panel::Panel;
pub use spinner::{spinner_enabled, supports_unicode, with_spinner, Spinner};
