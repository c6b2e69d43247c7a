//! Visual aid selection

use medlingo_config::VisualAidsConfig;
use medlingo_core::Term;
use std::collections::{BTreeSet, HashSet};

/// Media references in configured priority order
#[derive(Debug, Clone, Default)]
pub struct VisualAidMap {
    entries: Vec<(Term, String)>,
}

impl VisualAidMap {
    pub fn from_config(config: &VisualAidsConfig) -> Self {
        let mut seen = HashSet::new();
        let entries = config
            .visual_aids
            .iter()
            .filter(|aid| seen.insert(aid.term.clone()))
            .map(|aid| (aid.term.clone(), aid.url.clone()))
            .collect();

        Self { entries }
    }

    /// Media reference for a single term
    pub fn media_for(&self, term: &Term) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, url)| url.as_str())
    }

    /// Media for the highest-priority term in `terms` that has any
    pub fn visual_aid_for(&self, terms: &BTreeSet<Term>) -> Option<&str> {
        self.entries
            .iter()
            .find(|(term, _)| terms.contains(term))
            .map(|(_, url)| url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
