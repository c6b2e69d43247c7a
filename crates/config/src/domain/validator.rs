//! Config Validator for Domain Configuration
//!
//! Validates domain configuration at startup to catch errors early.
//! Performs:
//! - Base-language completeness of terms and departments
//! - Duplicate and empty entry checks
//! - Cross-reference validation (associations and visual aids point at known ids)
//!
//! # Example
//!
//! ```ignore
//! use medlingo_config::domain::ConfigValidator;
//!
//! let validator = ConfigValidator::new();
//! let result = validator.validate("medical", &config);
//! ```

use std::collections::HashSet;

use super::MedicalDomainConfig;

/// Validation error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Category of error
    pub category: ValidationCategory,
    /// Source file or config section
    pub source: String,
    /// Specific field or reference
    pub field: Option<String>,
    /// Error message
    pub message: String,
    /// Severity level
    pub severity: ValidationSeverity,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field_str = self.field.as_deref().unwrap_or("(root)");
        write!(
            f,
            "[{:?}] {}/{}: {}",
            self.severity, self.source, field_str, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Category of validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    /// Missing required configuration
    MissingRequired,
    /// Invalid cross-reference
    InvalidReference,
    /// Empty or malformed value
    InvalidValue,
    /// Duplicate definition
    Duplicate,
    /// Definition that can never take effect (warning)
    Unreachable,
}

/// Severity of validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational warning
    Warning,
    /// Potential issue
    Error,
    /// Critical - will prevent startup
    Critical,
}

/// Validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Domain name being validated
    pub domain: String,
}

impl ValidationResult {
    /// Create a new validation result
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            domain: domain.into(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a critical error
    pub fn add_critical(&mut self, source: &str, field: &str, message: &str) {
        self.add_error(ValidationError {
            category: ValidationCategory::MissingRequired,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Critical,
        });
    }

    /// Add a non-critical error of the given category
    pub fn add_invalid(
        &mut self,
        category: ValidationCategory,
        source: &str,
        field: &str,
        message: &str,
    ) {
        self.add_error(ValidationError {
            category,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        });
    }

    /// Add a warning
    pub fn add_warning(
        &mut self,
        category: ValidationCategory,
        source: &str,
        field: &str,
        message: &str,
    ) {
        self.add_error(ValidationError {
            category,
            source: source.to_string(),
            field: Some(field.to_string()),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        });
    }

    /// Check if validation passed (no critical errors)
    pub fn is_ok(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Critical)
    }

    /// Get only critical errors
    pub fn critical_errors(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Critical)
            .collect()
    }

    /// Get errors and critical errors (not warnings)
    pub fn errors_and_critical(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity >= ValidationSeverity::Error)
            .collect()
    }

    /// Summary string
    pub fn summary(&self) -> String {
        let count = |severity: ValidationSeverity| {
            self.errors.iter().filter(|e| e.severity == severity).count()
        };

        if self.errors.is_empty() {
            format!("Domain '{}': All validations passed", self.domain)
        } else {
            format!(
                "Domain '{}': {} critical, {} errors, {} warnings",
                self.domain,
                count(ValidationSeverity::Critical),
                count(ValidationSeverity::Error),
                count(ValidationSeverity::Warning)
            )
        }
    }
}

/// Config validator
pub struct ConfigValidator {
    /// Whether to include warnings
    include_warnings: bool,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            include_warnings: true,
        }
    }

    /// Set whether to include warnings
    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }

    /// Validate a domain configuration
    pub fn validate(&self, domain: &str, config: &MedicalDomainConfig) -> ValidationResult {
        let mut result = ValidationResult::new(domain);

        // 1. Glossary terms
        self.validate_glossary(config, &mut result);

        // 2. Departments
        self.validate_departments(config, &mut result);

        // 3. Cross-references
        self.validate_associations(config, &mut result);
        self.validate_visual_aids(config, &mut result);

        result
    }

    fn validate_glossary(&self, config: &MedicalDomainConfig, result: &mut ValidationResult) {
        let glossary = &config.glossary;
        let base = glossary.base_language;

        if glossary.terms.is_empty() && self.include_warnings {
            result.add_warning(
                ValidationCategory::MissingRequired,
                "glossary.yaml",
                "terms",
                "No terms defined",
            );
        }

        let mut seen = HashSet::new();
        for entry in &glossary.terms {
            let id = entry.term.as_str();

            if !seen.insert(id) {
                result.add_invalid(
                    ValidationCategory::Duplicate,
                    "glossary.yaml",
                    id,
                    "Term is defined more than once",
                );
            }

            if !entry.translations.contains_key(&base) {
                result.add_critical(
                    "glossary.yaml",
                    id,
                    &format!("Term has no {} entry", base.name()),
                );
            }

            for (lang, surface) in &entry.translations {
                if surface.trim().is_empty() {
                    result.add_invalid(
                        ValidationCategory::InvalidValue,
                        "glossary.yaml",
                        id,
                        &format!("Empty {} surface string", lang.name()),
                    );
                }
            }
        }
    }

    fn validate_departments(&self, config: &MedicalDomainConfig, result: &mut ValidationResult) {
        let base = config.glossary.base_language;

        let mut seen = HashSet::new();
        for dept in &config.departments.departments {
            let id = dept.id.as_str();

            if !seen.insert(id) {
                result.add_invalid(
                    ValidationCategory::Duplicate,
                    "departments.yaml",
                    id,
                    "Department is defined more than once",
                );
            }

            if !dept.translations.contains_key(&base) {
                result.add_critical(
                    "departments.yaml",
                    id,
                    &format!("Department has no {} name", base.name()),
                );
            }

            for (lang, name) in &dept.translations {
                if name.trim().is_empty() {
                    result.add_invalid(
                        ValidationCategory::InvalidValue,
                        "departments.yaml",
                        id,
                        &format!("Empty {} name", lang.name()),
                    );
                }
            }
        }
    }

    fn validate_associations(&self, config: &MedicalDomainConfig, result: &mut ValidationResult) {
        if !self.include_warnings {
            return;
        }

        let terms: HashSet<&str> = config.glossary.terms.iter().map(|e| e.term.as_str()).collect();
        let departments: HashSet<&str> = config
            .departments
            .departments
            .iter()
            .map(|d| d.id.as_str())
            .collect();

        for (term, depts) in &config.departments.associations {
            if !terms.contains(term.as_str()) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "departments.yaml",
                    term.as_str(),
                    "Association for a term that is not in the glossary",
                );
            }

            for dept in depts {
                if !departments.contains(dept.as_str()) {
                    result.add_warning(
                        ValidationCategory::InvalidReference,
                        "departments.yaml",
                        term.as_str(),
                        &format!("Association references unknown department: {}", dept),
                    );
                }
            }
        }
    }

    fn validate_visual_aids(&self, config: &MedicalDomainConfig, result: &mut ValidationResult) {
        if !self.include_warnings {
            return;
        }

        let terms: HashSet<&str> = config.glossary.terms.iter().map(|e| e.term.as_str()).collect();

        let mut seen = HashSet::new();
        for aid in &config.visual_aids.visual_aids {
            let id = aid.term.as_str();

            if !terms.contains(id) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "visual_aids.yaml",
                    id,
                    "Visual aid for a term that is not in the glossary",
                );
            }

            if !seen.insert(id) {
                result.add_warning(
                    ValidationCategory::Unreachable,
                    "visual_aids.yaml",
                    id,
                    "Duplicate entry; only the first one is ever used",
                );
            }
        }
    }
}
