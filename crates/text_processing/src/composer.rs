//! Builds the localized annotation for a set of matched terms

use medlingo_core::{AnnotationResult, DepartmentId, Language, LocalizedTerm, Term};
use std::collections::BTreeSet;

use crate::{DepartmentMap, GlossaryStore, VisualAidMap};

/// Projects canonical terms into a target language
///
/// Missing localizations are dropped from the output, never reported.
pub struct AnnotationComposer<'a> {
    glossary: &'a GlossaryStore,
    departments: &'a DepartmentMap,
    visual_aids: &'a VisualAidMap,
}

impl<'a> AnnotationComposer<'a> {
    pub fn new(
        glossary: &'a GlossaryStore,
        departments: &'a DepartmentMap,
        visual_aids: &'a VisualAidMap,
    ) -> Self {
        Self {
            glossary,
            departments,
            visual_aids,
        }
    }

    pub fn compose(&self, terms: &BTreeSet<Term>, target: Language) -> AnnotationResult {
        if terms.is_empty() {
            return AnnotationResult::empty();
        }

        let localized_terms: BTreeSet<LocalizedTerm> = terms
            .iter()
            .filter_map(|term| match self.glossary.lookup(term, target) {
                Some(surface) => Some(LocalizedTerm {
                    term: surface.to_string(),
                    english: term.clone(),
                }),
                None => {
                    tracing::trace!(term = %term, language = target.code(), "No localized term");
                    None
                }
            })
            .collect();

        let department_ids: BTreeSet<&DepartmentId> = terms
            .iter()
            .flat_map(|term| self.departments.departments_for(term))
            .collect();

        // Keyed by display name so departments that localize identically collapse
        let recommended_departments: BTreeSet<String> = department_ids
            .into_iter()
            .filter_map(|dept| match self.departments.localized_name(dept, target) {
                Some(name) => Some(name.to_string()),
                None => {
                    tracing::trace!(
                        department = %dept,
                        language = target.code(),
                        "No localized department name"
                    );
                    None
                }
            })
            .collect();

        let visual_aid = self.visual_aids.visual_aid_for(terms).map(str::to_string);

        AnnotationResult {
            localized_terms: localized_terms.into_iter().collect(),
            recommended_departments: recommended_departments.into_iter().collect(),
            visual_aid,
        }
    }
}
