//! LibreTranslate client
//!
//! `POST {endpoint}/translate` and `POST {endpoint}/detect`, JSON bodies.

use async_trait::async_trait;
use medlingo_config::TranslationConfig;
use medlingo_core::{Error, Language, LanguageDetection, Result, Translator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request to the /translate endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Response from the /translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Request to the /detect endpoint
#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// One entry of the /detect response
#[derive(Debug, Deserialize)]
struct DetectCandidate {
    language: String,
    confidence: f32,
}

/// LibreTranslate translator
pub struct LibreTranslateTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LibreTranslateTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if from == to || text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let request = TranslateRequest {
            q: text,
            source: from.code(),
            target: to.code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let url = format!("{}/translate", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Translation(format!("LibreTranslate request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Translation(format!(
                "LibreTranslate translation failed: {} - {}",
                status, body
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            Error::Translation(format!("Failed to parse LibreTranslate response: {}", e))
        })?;

        Ok(parsed.translated_text)
    }

    async fn detect_language(&self, text: &str) -> Result<Vec<LanguageDetection>> {
        let request = DetectRequest {
            q: text,
            api_key: self.api_key.as_deref(),
        };

        let url = format!("{}/detect", self.endpoint);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                Error::LanguageDetection(format!("LibreTranslate request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LanguageDetection(format!(
                "LibreTranslate detection failed: {} - {}",
                status, body
            )));
        }

        let candidates: Vec<DetectCandidate> = response.json().await.map_err(|e| {
            Error::LanguageDetection(format!("Failed to parse LibreTranslate response: {}", e))
        })?;

        Ok(to_detections(candidates))
    }

    fn name(&self) -> &str {
        "libretranslate"
    }
}

/// Keep candidates whose code maps to a supported language
fn to_detections(candidates: Vec<DetectCandidate>) -> Vec<LanguageDetection> {
    candidates
        .into_iter()
        .filter_map(|c| match Language::from_str_loose(&c.language) {
            Some(language) => Some(LanguageDetection::new(language, c.confidence)),
            None => {
                tracing::debug!(code = %c.language, "Ignoring unsupported detected language");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(endpoint: &str) -> LibreTranslateTranslator {
        let config = TranslationConfig {
            endpoint: endpoint.to_string(),
            timeout_ms: 500,
            ..Default::default()
        };
        LibreTranslateTranslator::new(&config).unwrap()
    }

    #[test]
    fn test_request_body() {
        let request = TranslateRequest {
            q: "I have a fever",
            source: "en",
            target: "es",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["q"], "I have a fever");
        assert_eq!(json["target"], "es");
        assert!(json.get("api_key").is_none());
    }

    #[test]
    fn test_response_parsing() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "Tengo fiebre"}"#).unwrap();
        assert_eq!(parsed.translated_text, "Tengo fiebre");

        let candidates: Vec<DetectCandidate> = serde_json::from_str(
            r#"[{"language": "hi", "confidence": 90}, {"language": "xx", "confidence": 5.5}, {"language": "zh-Hans", "confidence": 3}]"#,
        )
        .unwrap();
        let detections = to_detections(candidates);
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].language, Language::Hindi);
        assert_eq!(detections[0].confidence, 90.0);
        assert_eq!(detections[1].language, Language::Chinese);
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        assert_eq!(
            translator("http://localhost:5000/").endpoint(),
            "http://localhost:5000"
        );
    }

    #[tokio::test]
    async fn test_same_language_short_circuits() {
        // Nothing listens here; a request would fail
        let translator = translator("http://127.0.0.1:9");
        let out = translator
            .translate("fever", Language::English, Language::English)
            .await
            .unwrap();
        assert_eq!(out, "fever");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_translation_error() {
        let translator = translator("http://127.0.0.1:9");
        let err = translator
            .translate("fever", Language::English, Language::Spanish)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Translation(_)));

        let err = translator.detect_language("fever").await.unwrap_err();
        assert!(matches!(err, Error::LanguageDetection(_)));
    }
}
