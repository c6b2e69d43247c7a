//! Error types shared by the collaborator traits

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Language detection error: {0}")]
    LanguageDetection(String),

    /// Input yielded no usable text
    #[error("Text extraction error: {0}")]
    Extraction(String),

    /// Collaborator backend unreachable or failed (process, network)
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
