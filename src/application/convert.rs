//! Convert Use Case
//!
//! Orchestrates one request:
//! 1. Canonicalize the source and infer its extension
//! 2. Derive staging/output paths and resolve collisions (may prompt)
//! 3. Fetch into the staging path
//! 4. Run the conversion engine, attaching the LLM when allowed
//! 5. Write the Markdown to the output path
//!
//! Steps 1-2 ([`ConvertUseCase::prepare`]) are interactive; steps 3-5
//! ([`ConvertUseCase::run`]) never prompt, so callers can show a spinner
//! around them.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::{ConversionRequest, ResolvedPaths};
use crate::domain::ports::{
    ConversionEngine, CredentialStore, LlmAttachment, Prompter, SourceFetcher,
};
use crate::domain::services::{resolve_source, sanitize_title, CanonicalSource};
use crate::domain::value_objects::ProviderId;
use crate::error::EzmdResult;

use super::collision::resolve_collision;

/// A request whose paths are settled and which is ready to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedConversion {
    pub request: ConversionRequest,
    pub source: CanonicalSource,
    pub paths: ResolvedPaths,
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutcome {
    pub output_path: PathBuf,
    pub staging_path: PathBuf,
    pub bytes_fetched: u64,
    /// Provider that was attached to the engine, if any
    pub llm_provider: Option<ProviderId>,
}

/// Convert Use Case
pub struct ConvertUseCase<'a> {
    fetcher: &'a dyn SourceFetcher,
    engine: &'a dyn ConversionEngine,
    credentials: &'a dyn CredentialStore,
}

impl<'a> ConvertUseCase<'a> {
    pub fn new(
        fetcher: &'a dyn SourceFetcher,
        engine: &'a dyn ConversionEngine,
        credentials: &'a dyn CredentialStore,
    ) -> Self {
        Self {
            fetcher,
            engine,
            credentials,
        }
    }

    /// Canonicalize the source and settle both paths.
    ///
    /// Cancelling either collision prompt aborts before anything is written.
    pub fn prepare(
        &self,
        request: ConversionRequest,
        config: &Config,
        prompter: &dyn Prompter,
    ) -> EzmdResult<PreparedConversion> {
        let source = resolve_source(&request.source);
        let stem = sanitize_title(&request.title, config.max_filename_length());

        let staging = config
            .staging_dir()
            .join(format!("{}{}", stem, source.extension));
        let output = config.base_dir().join(format!("{}.md", stem));

        let staging_path = resolve_collision(&staging, request.overwrite, prompter)?;
        let output_path = resolve_collision(&output, request.overwrite, prompter)?;

        tracing::info!(
            source = %source.reference,
            staging = %staging_path.display(),
            output = %output_path.display(),
            "prepared conversion"
        );

        Ok(PreparedConversion {
            request,
            source,
            paths: ResolvedPaths {
                staging_path,
                output_path,
            },
        })
    }

    /// Fetch, convert, and write the output. Never prompts.
    pub fn run(
        &self,
        prepared: &PreparedConversion,
        config: &Config,
    ) -> EzmdResult<ConvertOutcome> {
        let paths = &prepared.paths;

        let bytes_fetched = self
            .fetcher
            .fetch(&prepared.source.reference, &paths.staging_path)?;

        let llm = self.llm_attachment(&prepared.request, config);
        let text = self.engine.convert(&paths.staging_path, llm.as_ref())?;

        if let Some(parent) = paths.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&paths.output_path, text)?;

        tracing::info!(
            output = %paths.output_path.display(),
            engine = self.engine.name(),
            llm = llm.as_ref().map(|l| l.provider.as_str()).unwrap_or("none"),
            "conversion complete"
        );

        Ok(ConvertOutcome {
            output_path: paths.output_path.clone(),
            staging_path: paths.staging_path.clone(),
            bytes_fetched,
            llm_provider: llm.map(|l| l.provider),
        })
    }

    /// `prepare` then `run`.
    pub fn execute(
        &self,
        request: ConversionRequest,
        config: &Config,
        prompter: &dyn Prompter,
    ) -> EzmdResult<ConvertOutcome> {
        let prepared = self.prepare(request, config, prompter)?;
        self.run(&prepared, config)
    }

    /// LLM capability for this request, if every condition holds:
    /// a provider was chosen, its key is stored, and image descriptions are on.
    pub fn llm_attachment(
        &self,
        request: &ConversionRequest,
        config: &Config,
    ) -> Option<LlmAttachment> {
        let provider = request.provider.as_ref()?;
        if !config.llm.use_for_images {
            return None;
        }
        let api_key = self.credentials.get(provider)?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(LlmAttachment {
            provider: provider.clone(),
            model: config.model_for(provider),
            api_key,
        })
    }
}
