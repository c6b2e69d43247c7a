//! Error types for text processing

use medlingo_config::ConfigError;
use thiserror::Error;

/// Text processing error
#[derive(Error, Debug)]
pub enum TextProcessingError {
    /// Domain configuration is structurally broken; raised before serving
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Language detection error: {0}")]
    Detection(String),

    /// No text could be recovered from the input
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// An external backend could not be reached or failed
    #[error("Backend error: {0}")]
    Backend(String),
}

impl From<medlingo_core::Error> for TextProcessingError {
    fn from(err: medlingo_core::Error) -> Self {
        use medlingo_core::Error;
        match err {
            Error::Translation(msg) => Self::Translation(msg),
            Error::LanguageDetection(msg) => Self::Detection(msg),
            Error::Extraction(msg) => Self::Extraction(msg),
            Error::Backend(msg) => Self::Backend(msg),
            Error::UnsupportedLanguage(code) => {
                Self::Translation(format!("Unsupported language: {}", code))
            }
            Error::Config(msg) => Self::Configuration(msg),
        }
    }
}

impl From<ConfigError> for TextProcessingError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result type for text processing
pub type Result<T> = std::result::Result<T, TextProcessingError>;
