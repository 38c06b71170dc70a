//! External-command conversion engine (`markitdown <file>` by default)

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::EngineConfig;
use crate::domain::ports::{ConversionEngine, LlmAttachment};
use crate::error::{EzmdError, EzmdResult};

pub const ENV_LLM_PROVIDER: &str = "EZMD_LLM_PROVIDER";
pub const ENV_LLM_MODEL: &str = "EZMD_LLM_MODEL";
pub const ENV_LLM_API_KEY: &str = "EZMD_LLM_API_KEY";

/// Runs a converter program and captures its stdout as the Markdown text.
///
/// The LLM attachment, when present, is handed to the child through its
/// environment only.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn build_command(&self, input: &Path, llm: Option<&LlmAttachment>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(llm) = llm {
            cmd.env(ENV_LLM_PROVIDER, llm.provider.as_str())
                .env(ENV_LLM_MODEL, &llm.model)
                .env(ENV_LLM_API_KEY, &llm.api_key);
            if let Some(var) = llm.provider.conventional_key_var() {
                cmd.env(var, &llm.api_key);
            }
        }
        cmd
    }
}

impl Default for CommandEngine {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ConversionEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.program
    }

    fn convert(&self, input: &Path, llm: Option<&LlmAttachment>) -> EzmdResult<String> {
        tracing::debug!(
            engine = %self.program,
            input = %input.display(),
            llm = llm.map(|l| l.provider.as_str()).unwrap_or("none"),
            "running conversion engine"
        );

        let output = self
            .build_command(input, llm)
            .output()
            .map_err(|e| {
                EzmdError::conversion(input, format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            let reason = if detail.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                format!("{} exited with {}: {}", self.program, output.status, detail)
            };
            return Err(EzmdError::conversion(input, reason));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            EzmdError::conversion(
                input,
                format!("{} produced non-UTF-8 output: {}", self.program, e),
            )
        })
    }
}
