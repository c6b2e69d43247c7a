//! Master Domain Configuration
//!
//! Loads glossary, departments and visual aids for one domain from
//! config/domains/{domain}/, or from the copy embedded at build time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::departments::DepartmentsConfig;
use super::glossary::GlossaryConfig;
use super::validator::{ConfigValidator, ValidationSeverity};
use super::visual_aids::VisualAidsConfig;
use crate::ConfigError;

const BUNDLED_DOMAIN_ID: &str = "medical";
const BUNDLED_GLOSSARY: &str = include_str!("../../../../config/domains/medical/glossary.yaml");
const BUNDLED_DEPARTMENTS: &str =
    include_str!("../../../../config/domains/medical/departments.yaml");
const BUNDLED_VISUAL_AIDS: &str =
    include_str!("../../../../config/domains/medical/visual_aids.yaml");

/// Complete configuration of one domain
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MedicalDomainConfig {
    pub domain_id: String,
    pub glossary: GlossaryConfig,
    #[serde(default)]
    pub departments: DepartmentsConfig,
    #[serde(default)]
    pub visual_aids: VisualAidsConfig,
}

impl MedicalDomainConfig {
    /// Load a domain from `{config_dir}/domains/{domain_id}/`
    ///
    /// glossary.yaml is required; the other files are optional and default
    /// to empty tables when absent.
    pub fn load(domain_id: &str, config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let domain_dir = config_dir.as_ref().join("domains").join(domain_id);

        // 1. Glossary (required)
        let glossary_path = domain_dir.join("glossary.yaml");
        if !glossary_path.exists() {
            return Err(ConfigError::FileNotFound(glossary_path.display().to_string()));
        }
        let glossary = GlossaryConfig::load(&glossary_path)?;
        tracing::info!(
            domain = domain_id,
            terms = glossary.len(),
            languages = glossary.languages().len(),
            "Loaded glossary"
        );

        // 2. Departments (optional)
        let departments_path = domain_dir.join("departments.yaml");
        let departments = if departments_path.exists() {
            let departments = DepartmentsConfig::load(&departments_path)?;
            tracing::info!(
                departments = departments.departments.len(),
                associations = departments.associations.len(),
                "Loaded departments configuration"
            );
            departments
        } else {
            tracing::debug!("No departments config found at {:?}", departments_path);
            DepartmentsConfig::default()
        };

        // 3. Visual aids (optional)
        let visual_aids_path = domain_dir.join("visual_aids.yaml");
        let visual_aids = if visual_aids_path.exists() {
            let visual_aids = VisualAidsConfig::load(&visual_aids_path)?;
            tracing::info!(
                visual_aids = visual_aids.visual_aids.len(),
                "Loaded visual aids configuration"
            );
            visual_aids
        } else {
            tracing::debug!("No visual aids config found at {:?}", visual_aids_path);
            VisualAidsConfig::default()
        };

        Ok(Self {
            domain_id: domain_id.to_string(),
            glossary,
            departments,
            visual_aids,
        })
    }

    /// The medical domain as shipped in config/domains/medical, embedded at
    /// compile time
    pub fn bundled() -> Result<Self, ConfigError> {
        Ok(Self {
            domain_id: BUNDLED_DOMAIN_ID.to_string(),
            glossary: super::parse_yaml(BUNDLED_GLOSSARY, "bundled glossary.yaml")?,
            departments: super::parse_yaml(BUNDLED_DEPARTMENTS, "bundled departments.yaml")?,
            visual_aids: super::parse_yaml(BUNDLED_VISUAL_AIDS, "bundled visual_aids.yaml")?,
        })
    }

    /// Run the `ConfigValidator`, logging warnings
    ///
    /// Fails if any error or critical issue was found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = ConfigValidator::new().validate(&self.domain_id, self);

        for issue in &result.errors {
            match issue.severity {
                ValidationSeverity::Warning => tracing::warn!("{}", issue),
                _ => tracing::error!("{}", issue),
            }
        }

        let blocking = result.errors_and_critical();
        if blocking.is_empty() {
            tracing::info!("{}", result.summary());
            return Ok(());
        }

        Err(ConfigError::InvalidValue {
            field: format!("domains/{}", self.domain_id),
            message: blocking
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medlingo_core::Language;
    use std::fs;

    const GLOSSARY: &str = r#"
base_language: en
terms:
  - term: fever
    translations: { en: fever, es: fiebre }
  - term: headache
    translations: { en: headache, es: dolor de cabeza }
"#;

    fn write_domain(dir: &Path, files: &[(&str, &str)]) {
        let domain_dir = dir.join("domains").join("medical");
        fs::create_dir_all(&domain_dir).unwrap();
        for (name, content) in files {
            fs::write(domain_dir.join(name), content).unwrap();
        }
    }

    #[test]
    fn test_load_with_optional_files_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_domain(dir.path(), &[("glossary.yaml", GLOSSARY)]);

        let config = MedicalDomainConfig::load("medical", dir.path()).unwrap();
        assert_eq!(config.domain_id, "medical");
        assert_eq!(config.glossary.len(), 2);
        assert!(config.departments.departments.is_empty());
        assert!(config.visual_aids.visual_aids.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_all_files() {
        let dir = tempfile::tempdir().unwrap();
        write_domain(
            dir.path(),
            &[
                ("glossary.yaml", GLOSSARY),
                (
                    "departments.yaml",
                    "departments:\n  - id: Neurology\n    translations: { en: Neurology }\nassociations:\n  headache: [Neurology]\n",
                ),
                (
                    "visual_aids.yaml",
                    "visual_aids:\n  - term: fever\n    url: https://example.org/fever.png\n",
                ),
            ],
        );

        let config = MedicalDomainConfig::load("medical", dir.path()).unwrap();
        assert_eq!(config.departments.departments.len(), 1);
        assert_eq!(config.visual_aids.visual_aids.len(), 1);
    }

    #[test]
    fn test_missing_glossary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_domain(dir.path(), &[("departments.yaml", "{}")]);

        let err = MedicalDomainConfig::load("medical", dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_malformed_optional_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_domain(
            dir.path(),
            &[("glossary.yaml", GLOSSARY), ("visual_aids.yaml", "visual_aids: 42")],
        );

        let err = MedicalDomainConfig::load("medical", dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validate_rejects_missing_base_entry() {
        let mut config = MedicalDomainConfig::bundled().unwrap();
        config.glossary.terms[0].translations.remove(&Language::English);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_bundled_domain_is_valid() {
        let config = MedicalDomainConfig::bundled().unwrap();
        assert_eq!(config.domain_id, "medical");
        assert!(config.glossary.len() >= 25);
        assert!(config.glossary.get("heart attack").is_some());
        assert!(!config.departments.associations.is_empty());
        assert!(!config.visual_aids.visual_aids.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shipped_files_match_bundled_copy() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config");
        let loaded = MedicalDomainConfig::load("medical", &dir).unwrap();
        let bundled = MedicalDomainConfig::bundled().unwrap();
        assert_eq!(loaded.glossary.len(), bundled.glossary.len());
        assert_eq!(
            loaded.visual_aids.visual_aids.len(),
            bundled.visual_aids.visual_aids.len()
        );
    }
}
