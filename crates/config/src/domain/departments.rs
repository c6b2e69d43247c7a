//! Department Configuration
//!
//! Clinical departments with their localized names, plus the term → department
//! association table used for recommendations.

use medlingo_core::{DepartmentId, Language, Term};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

/// One clinical department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub id: DepartmentId,
    /// Language → display name
    #[serde(default)]
    pub translations: BTreeMap<Language, String>,
}

/// Departments configuration loaded from departments.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DepartmentsConfig {
    #[serde(default)]
    pub departments: Vec<DepartmentEntry>,
    /// Term → departments it should be referred to
    #[serde(default)]
    pub associations: BTreeMap<Term, Vec<DepartmentId>>,
}

impl DepartmentsConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        super::read_yaml(path.as_ref())
    }

    /// Find a department by id
    pub fn get(&self, id: &str) -> Option<&DepartmentEntry> {
        self.departments.iter().find(|d| d.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_departments_deserialization() {
        let yaml = r#"
departments:
  - id: Neurology
    translations:
      en: Neurology
      es: Neurología
  - id: Allergy & Immunology
    translations:
      en: Allergy & Immunology
associations:
  headache: [Neurology, General Medicine]
  allergy: ["Allergy & Immunology"]
"#;
        let config: DepartmentsConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.departments.len(), 2);
        assert_eq!(
            config.get("Neurology").unwrap().translations[&Language::Spanish],
            "Neurología"
        );
        assert_eq!(config.associations[&Term::new("headache")].len(), 2);
        assert_eq!(
            config.associations[&Term::new("allergy")],
            vec![DepartmentId::new("Allergy & Immunology")]
        );
    }

    #[test]
    fn test_empty_file_defaults() {
        let config: DepartmentsConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.departments.is_empty());
        assert!(config.associations.is_empty());
    }
}
