//! Conversion engine implementations

mod command;

pub use command::{CommandEngine, ENV_LLM_API_KEY, ENV_LLM_MODEL, ENV_LLM_PROVIDER};
