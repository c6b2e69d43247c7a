//! Glossary store
//!
//! Read-only multilingual dictionary built once from `GlossaryConfig`.
//! Besides plain lookups it precomputes, per language, the match candidates
//! the `TermMatcher` walks: normalized surface strings sorted longest first.

use medlingo_config::GlossaryConfig;
use medlingo_core::{Language, Term};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::matcher::normalize;
use crate::{Result, TextProcessingError};

/// A normalized surface string and every term it stands for in one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub surface: String,
    /// Sorted; more than one when terms share a surface form
    pub terms: Vec<Term>,
}

/// Immutable term dictionary
#[derive(Debug, Clone)]
pub struct GlossaryStore {
    base_language: Language,
    /// Terms in configuration order
    terms: Vec<Term>,
    entries: HashMap<Term, BTreeMap<Language, String>>,
    candidates: HashMap<Language, Vec<Candidate>>,
}

impl GlossaryStore {
    /// Build the store, refusing any term without a base-language entry
    pub fn from_config(config: &GlossaryConfig) -> Result<Self> {
        let base_language = config.base_language;
        let mut terms = Vec::with_capacity(config.terms.len());
        let mut entries = HashMap::with_capacity(config.terms.len());

        for entry in &config.terms {
            if !entry.translations.contains_key(&base_language) {
                return Err(TextProcessingError::Configuration(format!(
                    "glossary term '{}' has no {} entry",
                    entry.term,
                    base_language.name()
                )));
            }

            if entries.contains_key(&entry.term) {
                tracing::warn!(term = %entry.term, "Duplicate glossary term ignored");
                continue;
            }

            terms.push(entry.term.clone());
            entries.insert(entry.term.clone(), entry.translations.clone());
        }

        let candidates = build_candidates(&terms, &entries);

        tracing::info!(
            terms = terms.len(),
            languages = candidates.len(),
            "Glossary store ready"
        );

        Ok(Self {
            base_language,
            terms,
            entries,
            candidates,
        })
    }

    /// Localized surface form of `term`, if the glossary has one
    pub fn lookup(&self, term: &Term, language: Language) -> Option<&str> {
        self.entries
            .get(term)
            .and_then(|translations| translations.get(&language))
            .map(|s| s.as_str())
    }

    /// All terms, in configuration order
    pub fn all_terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.entries.contains_key(term)
    }

    /// Match candidates for `language`, longest surface first
    ///
    /// Empty for a language no term is localized in.
    pub fn candidates(&self, language: Language) -> &[Candidate] {
        self.candidates
            .get(&language)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    pub fn base_language(&self) -> Language {
        self.base_language
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

fn build_candidates(
    terms: &[Term],
    entries: &HashMap<Term, BTreeMap<Language, String>>,
) -> HashMap<Language, Vec<Candidate>> {
    let mut by_language: HashMap<Language, BTreeMap<String, BTreeSet<Term>>> = HashMap::new();

    for term in terms {
        let Some(translations) = entries.get(term) else {
            continue;
        };
        for (language, surface) in translations {
            let surface = normalize(surface);
            if surface.is_empty() {
                continue;
            }
            by_language
                .entry(*language)
                .or_default()
                .entry(surface)
                .or_default()
                .insert(term.clone());
        }
    }

    by_language
        .into_iter()
        .map(|(language, surfaces)| {
            let mut candidates: Vec<Candidate> = surfaces
                .into_iter()
                .map(|(surface, terms)| Candidate {
                    surface,
                    terms: terms.into_iter().collect(),
                })
                .collect();
            // Longest first; ties broken by surface for a stable order
            candidates.sort_by(|a, b| {
                b.surface
                    .chars()
                    .count()
                    .cmp(&a.surface.chars().count())
                    .then_with(|| a.surface.cmp(&b.surface))
            });
            (language, candidates)
        })
        .collect()
}
