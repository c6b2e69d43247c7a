//! Term → department associations and department localization

use medlingo_config::DepartmentsConfig;
use medlingo_core::{DepartmentId, Language, Term};
use std::collections::{BTreeMap, BTreeSet, HashMap};

static NO_DEPARTMENTS: BTreeSet<DepartmentId> = BTreeSet::new();

/// Read-only department tables
#[derive(Debug, Clone, Default)]
pub struct DepartmentMap {
    associations: HashMap<Term, BTreeSet<DepartmentId>>,
    names: HashMap<DepartmentId, BTreeMap<Language, String>>,
}

impl DepartmentMap {
    pub fn from_config(config: &DepartmentsConfig) -> Self {
        let names = config
            .departments
            .iter()
            .map(|d| (d.id.clone(), d.translations.clone()))
            .collect();

        let associations = config
            .associations
            .iter()
            .map(|(term, depts)| (term.clone(), depts.iter().cloned().collect()))
            .collect();

        Self {
            associations,
            names,
        }
    }

    /// Departments associated with `term`; empty when unmapped
    pub fn departments_for(&self, term: &Term) -> &BTreeSet<DepartmentId> {
        self.associations.get(term).unwrap_or(&NO_DEPARTMENTS)
    }

    /// Display name of a department in `language`
    pub fn localized_name(&self, department: &DepartmentId, language: Language) -> Option<&str> {
        self.names
            .get(department)
            .and_then(|names| names.get(&language))
            .map(|s| s.as_str())
    }

    /// Number of known departments
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
