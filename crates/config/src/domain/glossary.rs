//! Glossary Configuration
//!
//! Loads the multilingual medical glossary from glossary.yaml. Each entry is
//! keyed by its canonical (base-language) term and carries one surface string
//! per language it is known in. Coverage is expected to be partial.

use medlingo_core::{Language, Term};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

/// One glossary term with its localized surface forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Canonical identifier
    pub term: Term,
    /// Language → surface string
    #[serde(default)]
    pub translations: BTreeMap<Language, String>,
}

impl GlossaryEntry {
    /// Surface string in `language`, if any
    pub fn surface(&self, language: Language) -> Option<&str> {
        self.translations.get(&language).map(|s| s.as_str())
    }
}

/// Glossary configuration loaded from glossary.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlossaryConfig {
    /// Language every term must be present in
    #[serde(default)]
    pub base_language: Language,
    /// Terms in file order
    #[serde(default)]
    pub terms: Vec<GlossaryEntry>,
}

impl GlossaryConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        super::read_yaml(path.as_ref())
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Find an entry by canonical term
    pub fn get(&self, term: &str) -> Option<&GlossaryEntry> {
        self.terms.iter().find(|e| e.term.as_str() == term)
    }

    /// Languages that appear in at least one entry
    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self
            .terms
            .iter()
            .flat_map(|e| e.translations.keys().copied())
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }
}
