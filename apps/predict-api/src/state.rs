//! Application state: pipeline resources and model artifacts.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use inference_engine::ModelBundle;
use judgment_pipeline::PipelineContext;

use crate::presets::PresetAnswers;

/// Read-only shared state, loaded once before the listener binds.
pub struct AppState {
    pub pipeline: PipelineContext,
    pub models: ModelBundle,
    pub presets: PresetAnswers,
}

impl AppState {
    pub fn load() -> Result<Self> {
        let resources = PathBuf::from(
            std::env::var("RESOURCES_DIR").unwrap_or_else(|_| "resources".to_string()),
        );
        Self::load_from(&resources)
    }

    pub fn load_from(resources: &Path) -> Result<Self> {
        tracing::info!("Loading resources from {}", resources.display());

        let pipeline = PipelineContext::load(
            &resources.join("legal_terms.txt"),
            &resources.join("stopwords_zh.txt"),
        )
        .context("loading pipeline resources")?;

        let models =
            ModelBundle::load(&resources.join("models")).context("loading model artifacts")?;

        Ok(Self {
            pipeline,
            models,
            presets: PresetAnswers::builtin(),
        })
    }
}
