//! Annotation types
//!
//! `Term` and `DepartmentId` are canonical identifiers: the base-language
//! (English) spelling of a glossary entry or clinical department. They are
//! the join key between the glossary, department and visual-aid tables.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Language;

/// Canonical identifier of a medical concept (e.g. "fever")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Canonical identifier of a clinical department (e.g. "Neurology")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(String);

impl DepartmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DepartmentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for DepartmentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A found term rendered in the target language, paired with its canonical id
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalizedTerm {
    /// Surface form in the target language
    pub term: String,
    /// Canonical term it was resolved from
    pub english: Term,
}

/// Input of a single annotation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRequest {
    pub text: String,
    pub source_language: Language,
    pub target_language: Language,
}

impl AnnotationRequest {
    pub fn new(text: impl Into<String>, source_language: Language, target_language: Language) -> Self {
        Self {
            text: text.into(),
            source_language,
            target_language,
        }
    }
}

/// Localized annotation of one input text
///
/// `localized_terms` and `recommended_departments` are sets; they are kept
/// sorted so that equal inputs always serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResult {
    pub localized_terms: Vec<LocalizedTerm>,
    pub recommended_departments: Vec<String>,
    pub visual_aid: Option<String>,
}

impl AnnotationResult {
    /// Result for text in which nothing was found
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.localized_terms.is_empty()
            && self.recommended_departments.is_empty()
            && self.visual_aid.is_none()
    }

    /// Canonical terms that made it into the localized output
    pub fn canonical_terms(&self) -> impl Iterator<Item = &Term> {
        self.localized_terms.iter().map(|t| &t.english)
    }
}
