//! Medical Domain Configuration
//!
//! Static vocabulary loaded once at startup from config/domains/{domain}/:
//! 1. glossary.yaml - canonical terms and their localized surface forms (required)
//! 2. departments.yaml - departments and term associations (optional)
//! 3. visual_aids.yaml - media per term, in priority order (optional)
//!
//! The parsed tables are handed to the text processing crate, which builds
//! the read-only lookup structures used per request.

mod departments;
mod glossary;
mod master;
mod validator;
mod visual_aids;

pub use departments::{DepartmentEntry, DepartmentsConfig};
pub use glossary::{GlossaryConfig, GlossaryEntry};
pub use master::MedicalDomainConfig;
pub use validator::{
    ConfigValidator, ValidationCategory, ValidationError, ValidationResult, ValidationSeverity,
};
pub use visual_aids::{VisualAidEntry, VisualAidsConfig};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::ConfigError;

/// Read and parse one YAML file
fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
        _ => ConfigError::ParseError(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    parse_yaml(&content, &path.display().to_string())
}

/// Parse YAML text, naming `source` in the error
fn parse_yaml<T: DeserializeOwned>(content: &str, source: &str) -> Result<T, ConfigError> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("Failed to parse {}: {}", source, e)))
}
