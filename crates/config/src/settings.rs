//! Main settings module

use config::{Config, Environment, File};
use medlingo_core::Language;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Translation backend
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Language detection thresholds
    #[serde(default)]
    pub detection: DetectionConfig,

    /// OCR extractor
    #[serde(default)]
    pub ocr: OcrConfig,

    /// Which domain configuration to load, and from where
    #[serde(default)]
    pub domain: DomainSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_translation()?;
        self.validate_detection()?;
        self.validate_ocr()?;

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if server.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_upload_bytes".to_string(),
                message: "Upload limit must be at least 1 byte".to_string(),
            });
        }

        if self.environment.is_production() && server.cors_enabled && server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }

    fn validate_translation(&self) -> Result<(), ConfigError> {
        let translation = &self.translation;

        if translation.provider == TranslationProvider::LibreTranslate
            && translation.endpoint.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "translation.endpoint".to_string(),
                message: "Endpoint is required for the libretranslate provider".to_string(),
            });
        }

        if translation.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "translation.timeout_ms".to_string(),
                message: "Timeout must be at least 1ms".to_string(),
            });
        }

        if self.environment.is_strict() && translation.provider == TranslationProvider::Disabled {
            tracing::warn!("Translation is disabled; responses will echo the source text");
        }

        Ok(())
    }

    fn validate_detection(&self) -> Result<(), ConfigError> {
        let min = self.detection.min_confidence;
        if !(0.0..=100.0).contains(&min) {
            return Err(ConfigError::InvalidValue {
                field: "detection.min_confidence".to_string(),
                message: format!("Must be between 0 and 100, got {}", min),
            });
        }

        Ok(())
    }

    fn validate_ocr(&self) -> Result<(), ConfigError> {
        if self.ocr.tesseract_cmd.trim().is_empty() {
            return Err(ConfigError::MissingField("ocr.tesseract_cmd".to_string()));
        }

        if self.ocr.languages.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ocr.languages".to_string(),
                message: "At least one OCR language is required".to_string(),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Largest accepted image upload
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Directory served under /static (visual aid images)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_true() -> bool {
    true
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            // Empty by default - must be explicitly configured for production
            cors_origins: Vec::new(),
            max_upload_bytes: default_max_upload_bytes(),
            static_dir: default_static_dir(),
        }
    }
}

/// Translation backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// LibreTranslate HTTP API
    #[default]
    LibreTranslate,
    /// Pass-through; text is returned untranslated
    Disabled,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Base URL of the LibreTranslate server
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_translation_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_translation_endpoint() -> String {
    "http://localhost:5000".to_string()
}

fn default_translation_timeout_ms() -> u64 {
    10_000
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_translation_endpoint(),
            api_key: None,
            timeout_ms: default_translation_timeout_ms(),
        }
    }
}

/// Language detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Detections at or below this confidence (percent) are rejected
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,

    /// Language used when detection is inconclusive
    #[serde(default)]
    pub fallback_language: Language,
}

fn default_min_confidence() -> f32 {
    30.0
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            fallback_language: Language::BASE,
        }
    }
}

/// OCR configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract executable
    #[serde(default = "default_tesseract_cmd")]
    pub tesseract_cmd: String,

    /// Tesseract language packs, joined with '+' on the command line
    #[serde(default = "default_ocr_languages")]
    pub languages: Vec<String>,
}

fn default_tesseract_cmd() -> String {
    "tesseract".to_string()
}

fn default_ocr_languages() -> Vec<String> {
    vec!["eng".to_string()]
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: default_tesseract_cmd(),
            languages: default_ocr_languages(),
        }
    }
}

/// Domain configuration location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSettings {
    /// Directory containing domains/{domain_id}/
    #[serde(default = "default_config_dir")]
    pub config_dir: String,

    #[serde(default = "default_domain_id")]
    pub domain_id: String,
}

fn default_config_dir() -> String {
    "config".to_string()
}

fn default_domain_id() -> String {
    "medical".to_string()
}

impl Default for DomainSettings {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            domain_id: default_domain_id(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (MEDLINGO_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("MEDLINGO")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5001);
        assert_eq!(settings.translation.provider, TranslationProvider::LibreTranslate);
        assert_eq!(settings.translation.endpoint, "http://localhost:5000");
        assert_eq!(settings.detection.min_confidence, 30.0);
        assert_eq!(settings.detection.fallback_language, Language::English);
        assert_eq!(settings.domain.domain_id, "medical");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());

        settings.server.port = 5001;
        settings.server.max_upload_bytes = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_detection_validation() {
        let mut settings = Settings::default();

        settings.detection.min_confidence = 101.0;
        assert!(settings.validate_detection().is_err());

        settings.detection.min_confidence = -1.0;
        assert!(settings.validate_detection().is_err());

        settings.detection.min_confidence = 0.0;
        assert!(settings.validate_detection().is_ok());
    }

    #[test]
    fn test_translation_validation() {
        let mut settings = Settings::default();
        settings.translation.endpoint = "  ".to_string();
        assert!(settings.validate_translation().is_err());

        // Endpoint is irrelevant once translation is disabled
        settings.translation.provider = TranslationProvider::Disabled;
        assert!(settings.validate_translation().is_ok());

        settings.translation.timeout_ms = 0;
        assert!(settings.validate_translation().is_err());
    }

    #[test]
    fn test_ocr_validation() {
        let mut settings = Settings::default();
        settings.ocr.languages.clear();
        assert!(matches!(
            settings.validate_ocr(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = r#"
environment: production
server:
  port: 8080
  cors_origins: ["https://clinic.example.org"]
translation:
  provider: disabled
detection:
  fallback_language: hi
ocr:
  languages: [eng, hin]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.environment.is_production());
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.translation.provider, TranslationProvider::Disabled);
        assert_eq!(settings.detection.fallback_language, Language::Hindi);
        assert_eq!(settings.detection.min_confidence, 30.0);
        assert_eq!(settings.ocr.languages, vec!["eng", "hin"]);
        assert!(settings.validate().is_ok());
    }
}
