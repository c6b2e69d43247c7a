//! Pass-through translator

use async_trait::async_trait;
use medlingo_core::{Language, LanguageDetection, Result, Translator};

use super::ScriptDetector;

/// Returns text unchanged; detects language from its script
#[derive(Debug, Default)]
pub struct NoopTranslator {
    detector: ScriptDetector,
}

impl NoopTranslator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    async fn detect_language(&self, text: &str) -> Result<Vec<LanguageDetection>> {
        Ok(self.detector.detect(text).into_iter().collect())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pass_through() {
        let translator = NoopTranslator::new();
        let out = translator
            .translate("I have a fever", Language::English, Language::Hindi)
            .await
            .unwrap();
        assert_eq!(out, "I have a fever");
    }

    #[tokio::test]
    async fn test_detect_by_script() {
        let translator = NoopTranslator::new();
        let detected = translator.detect_language("मुझे बुखार है").await.unwrap();
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].language, Language::Hindi);

        assert!(translator.detect_language("12345").await.unwrap().is_empty());
    }
}
