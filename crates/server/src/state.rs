//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use medlingo_config::Settings;
use medlingo_text_processing::{AnnotationPipeline, Result};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Settings the server was started with
    pub config: Arc<Settings>,
    /// Annotation pipeline over the loaded domain
    pub pipeline: Arc<AnnotationPipeline>,
}

impl AppState {
    pub fn new(config: Settings, pipeline: AnnotationPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        }
    }

    /// Build the pipeline described by the settings
    pub fn from_settings(config: Settings) -> Result<Self> {
        let pipeline = AnnotationPipeline::from_settings(&config)?;
        Ok(Self::new(config, pipeline))
    }
}
