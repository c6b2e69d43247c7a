//! Translation module with script detection
//!
//! Translation is delegated to a LibreTranslate server. When it is disabled,
//! or the client cannot be built, text passes through unchanged and language
//! detection falls back to Unicode script analysis.

mod detect;
mod libre;
mod noop;

pub use detect::ScriptDetector;
pub use libre::LibreTranslateTranslator;
pub use noop::NoopTranslator;

use medlingo_config::{TranslationConfig, TranslationProvider};
use medlingo_core::Translator;
use std::sync::Arc;

/// Create translator based on config
pub fn create_translator(config: &TranslationConfig) -> Arc<dyn Translator> {
    match config.provider {
        TranslationProvider::LibreTranslate => match LibreTranslateTranslator::new(config) {
            Ok(translator) => {
                tracing::info!(endpoint = %config.endpoint, "Using LibreTranslate");
                Arc::new(translator)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to build LibreTranslate client, falling back to pass-through"
                );
                Arc::new(NoopTranslator::new())
            }
        },
        TranslationProvider::Disabled => {
            tracing::info!("Translation disabled, using pass-through");
            Arc::new(NoopTranslator::new())
        }
    }
}
