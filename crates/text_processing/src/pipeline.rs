//! Request-scoped annotation pipeline
//!
//! Ties the shared [`MedicalKnowledge`] to the external collaborators:
//! a [`Translator`] for translation and language detection, and a
//! [`TextExtractor`] for images.

use medlingo_config::{DetectionConfig, Settings};
use medlingo_core::{
    AnnotationRequest, AnnotationResult, Language, TextExtractor, Translator,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{ocr, translation, MedicalKnowledge, Result, TextProcessingError};

/// Translated text together with the annotation of its source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub annotation: AnnotationResult,
}

/// Annotation pipeline
pub struct AnnotationPipeline {
    knowledge: Arc<MedicalKnowledge>,
    translator: Arc<dyn Translator>,
    extractor: Arc<dyn TextExtractor>,
    detection: DetectionConfig,
}

impl AnnotationPipeline {
    pub fn new(
        knowledge: Arc<MedicalKnowledge>,
        translator: Arc<dyn Translator>,
        extractor: Arc<dyn TextExtractor>,
        detection: DetectionConfig,
    ) -> Self {
        Self {
            knowledge,
            translator,
            extractor,
            detection,
        }
    }

    /// Load the domain and build collaborators from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let knowledge = Arc::new(MedicalKnowledge::load(&settings.domain)?);
        let translator = translation::create_translator(&settings.translation);
        let extractor = ocr::create_extractor(&settings.ocr);

        tracing::info!(
            domain = %knowledge.domain_id(),
            terms = knowledge.glossary().len(),
            translator = translator.name(),
            extractor = extractor.name(),
            "Annotation pipeline ready"
        );

        Ok(Self::new(
            knowledge,
            translator,
            extractor,
            settings.detection.clone(),
        ))
    }

    /// Match terms in the source text and localize them
    pub fn annotate(&self, request: &AnnotationRequest) -> AnnotationResult {
        self.knowledge.annotate(request)
    }

    /// Translate text and annotate the original
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<TranslationOutcome> {
        if text.trim().is_empty() {
            return Ok(TranslationOutcome::default());
        }

        if !self.translator.supports_pair(source, target) {
            return Err(TextProcessingError::Translation(format!(
                "{} does not support {} -> {}",
                self.translator.name(),
                source.code(),
                target.code()
            )));
        }

        let annotation = self.annotate(&AnnotationRequest::new(text, source, target));
        let translated_text = self.translator.translate(text, source, target).await?;

        Ok(TranslationOutcome {
            translated_text,
            annotation,
        })
    }

    /// Most confident detection above the threshold, else the fallback language
    pub async fn detect_language(&self, text: &str) -> Result<Language> {
        if text.trim().is_empty() {
            return Ok(self.detection.fallback_language);
        }

        let detections = self.translator.detect_language(text).await?;
        let best = detections
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence));

        match best {
            Some(d) if d.confidence > self.detection.min_confidence => Ok(d.language),
            other => {
                tracing::debug!(
                    candidate = ?other.map(|d| d.language),
                    fallback = %self.detection.fallback_language,
                    "Language detection inconclusive"
                );
                Ok(self.detection.fallback_language)
            }
        }
    }

    /// Recover text from an uploaded image
    pub async fn extract_text(&self, image: &[u8]) -> Result<String> {
        Ok(self.extractor.extract_text(image).await?)
    }

    pub fn knowledge(&self) -> &MedicalKnowledge {
        &self.knowledge
    }

    pub fn translator_name(&self) -> &str {
        self.translator.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use medlingo_core::{Error, LanguageDetection};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Upper-cases text, reports fixed detections, counts calls
    struct MockTranslator {
        detections: Vec<LanguageDetection>,
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockTranslator {
        fn new(detections: Vec<LanguageDetection>) -> Self {
            Self {
                detections,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(Vec::new())
            }
        }
    }

    #[async_trait]
    impl Translator for MockTranslator {
        async fn translate(&self, text: &str, _from: Language, _to: Language) -> medlingo_core::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Translation("service down".to_string()));
            }
            Ok(text.to_uppercase())
        }

        async fn detect_language(&self, _text: &str) -> medlingo_core::Result<Vec<LanguageDetection>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::LanguageDetection("service down".to_string()));
            }
            Ok(self.detections.clone())
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    struct FixedExtractor(&'static str);

    #[async_trait]
    impl TextExtractor for FixedExtractor {
        async fn extract_text(&self, _image: &[u8]) -> medlingo_core::Result<String> {
            if self.0.is_empty() {
                return Err(Error::Extraction("no text found".to_string()));
            }
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn pipeline(translator: Arc<MockTranslator>) -> AnnotationPipeline {
        AnnotationPipeline::new(
            MedicalKnowledge::bundled().unwrap(),
            translator,
            Arc::new(FixedExtractor("I have a cough")),
            DetectionConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_translate_annotates_source() {
        let translator = Arc::new(MockTranslator::new(Vec::new()));
        let outcome = pipeline(translator.clone())
            .translate("I have a fever", Language::English, Language::Spanish)
            .await
            .unwrap();

        assert_eq!(outcome.translated_text, "I HAVE A FEVER");
        assert_eq!(outcome.annotation.localized_terms.len(), 1);
        assert_eq!(outcome.annotation.localized_terms[0].term, "fiebre");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_translate_empty_skips_translator() {
        let translator = Arc::new(MockTranslator::failing());
        let outcome = pipeline(translator.clone())
            .translate("   ", Language::English, Language::Hindi)
            .await
            .unwrap();

        assert_eq!(outcome, TranslationOutcome::default());
        assert!(outcome.annotation.visual_aid.is_none());
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_failure_propagates() {
        let err = pipeline(Arc::new(MockTranslator::failing()))
            .translate("fever", Language::English, Language::Hindi)
            .await
            .unwrap_err();
        assert!(matches!(err, TextProcessingError::Translation(_)));
    }

    #[tokio::test]
    async fn test_detect_picks_most_confident() {
        let translator = Arc::new(MockTranslator::new(vec![
            LanguageDetection::new(Language::Spanish, 45.0),
            LanguageDetection::new(Language::Portuguese, 80.0),
        ]));
        let detected = pipeline(translator).detect_language("tenho febre").await.unwrap();
        assert_eq!(detected, Language::Portuguese);
    }

    #[tokio::test]
    async fn test_detect_low_confidence_falls_back() {
        let translator = Arc::new(MockTranslator::new(vec![LanguageDetection::new(
            Language::French,
            30.0,
        )]));
        let detected = pipeline(translator).detect_language("ok").await.unwrap();
        assert_eq!(detected, Language::English);

        let translator = Arc::new(MockTranslator::new(Vec::new()));
        let detected = pipeline(translator).detect_language("ok").await.unwrap();
        assert_eq!(detected, Language::English);
    }

    #[tokio::test]
    async fn test_detect_empty_skips_translator() {
        let translator = Arc::new(MockTranslator::failing());
        let detected = pipeline(translator.clone()).detect_language("").await.unwrap();
        assert_eq!(detected, Language::English);
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_detect_failure_propagates() {
        let err = pipeline(Arc::new(MockTranslator::failing()))
            .detect_language("hola")
            .await
            .unwrap_err();
        assert!(matches!(err, TextProcessingError::Detection(_)));
    }

    #[tokio::test]
    async fn test_extract_text() {
        let translator = Arc::new(MockTranslator::new(Vec::new()));
        let text = pipeline(translator.clone()).extract_text(b"png").await.unwrap();
        assert_eq!(text, "I have a cough");

        let empty = AnnotationPipeline::new(
            MedicalKnowledge::bundled().unwrap(),
            translator,
            Arc::new(FixedExtractor("")),
            DetectionConfig::default(),
        );
        let err = empty.extract_text(b"png").await.unwrap_err();
        assert!(matches!(err, TextProcessingError::Extraction(_)));
    }
}
