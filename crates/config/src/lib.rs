//! Configuration management for the medical translation assistant
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (MEDLINGO_ prefix, `__` separator)
//!
//! # Domain Configuration
//!
//! The medical vocabulary lives in config/domains/{domain}/:
//! - glossary.yaml - Terms and their localized surface forms
//! - departments.yaml - Clinical departments and term associations
//! - visual_aids.yaml - Illustrative media, in priority order
//!
//! Access via `MedicalDomainConfig`.

pub mod domain;
pub mod settings;

pub use settings::{
    load_settings, DetectionConfig, DomainSettings, ObservabilityConfig, OcrConfig,
    RuntimeEnvironment, ServerConfig, Settings, TranslationConfig, TranslationProvider,
};

pub use domain::{
    ConfigValidator, DepartmentEntry, DepartmentsConfig, GlossaryConfig, GlossaryEntry,
    MedicalDomainConfig, ValidationCategory, ValidationError, ValidationResult,
    ValidationSeverity, VisualAidEntry, VisualAidsConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for medlingo_core::Error {
    fn from(err: ConfigError) -> Self {
        medlingo_core::Error::Config(err.to_string())
    }
}
