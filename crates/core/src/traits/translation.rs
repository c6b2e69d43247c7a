//! Translation traits

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Language, Result};

/// One candidate language reported by a detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetection {
    pub language: Language,
    /// Confidence in percent (0..=100)
    pub confidence: f32,
}

impl LanguageDetection {
    pub fn new(language: Language, confidence: f32) -> Self {
        Self {
            language,
            confidence,
        }
    }
}

/// Translation interface
///
/// Implementations:
/// - `LibreTranslateTranslator` - LibreTranslate HTTP API
/// - `NoopTranslator` - Pass-through (disabled), script-based detection
///
/// # Example
///
/// ```ignore
/// let translator: Arc<dyn Translator> = create_translator(&config.translation);
/// let spanish = translator.translate(
///     "I have a fever",
///     Language::English,
///     Language::Spanish,
/// ).await?;
/// // "Tengo fiebre"
/// ```
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate text between languages
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `from` - Source language
    /// * `to` - Target language
    ///
    /// # Returns
    /// Translated text
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Detect language of text
    ///
    /// # Returns
    /// Candidate languages with confidences, in no particular order. Codes the
    /// backend reports that are not a supported `Language` are left out.
    async fn detect_language(&self, text: &str) -> Result<Vec<LanguageDetection>>;

    /// Check if language pair is supported
    fn supports_pair(&self, _from: Language, _to: Language) -> bool {
        true
    }

    /// Get translator name for logging
    fn name(&self) -> &str;
}
