//! Process-wide medical knowledge
//!
//! Glossary, department and visual aid tables built once at startup and
//! shared read-only by every request.

use medlingo_config::{DomainSettings, MedicalDomainConfig};
use medlingo_core::{AnnotationRequest, AnnotationResult, Term};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::{AnnotationComposer, DepartmentMap, GlossaryStore, Result, TermMatcher, VisualAidMap};

static BUNDLED: OnceCell<Arc<MedicalKnowledge>> = OnceCell::new();

/// The three lookup tables of one domain
#[derive(Debug)]
pub struct MedicalKnowledge {
    domain_id: String,
    glossary: GlossaryStore,
    departments: DepartmentMap,
    visual_aids: VisualAidMap,
}

impl MedicalKnowledge {
    /// Build from an already loaded configuration
    pub fn from_config(config: &MedicalDomainConfig) -> Result<Self> {
        Ok(Self {
            domain_id: config.domain_id.clone(),
            glossary: GlossaryStore::from_config(&config.glossary)?,
            departments: DepartmentMap::from_config(&config.departments),
            visual_aids: VisualAidMap::from_config(&config.visual_aids),
        })
    }

    /// Load, validate and build the configured domain
    ///
    /// Falls back to the bundled medical domain when the configuration
    /// directory does not exist at all.
    pub fn load(settings: &DomainSettings) -> Result<Self> {
        let config = if Path::new(&settings.config_dir).join("domains").exists() {
            MedicalDomainConfig::load(&settings.domain_id, &settings.config_dir)?
        } else {
            tracing::warn!(
                config_dir = %settings.config_dir,
                "Domain config directory not found, using bundled medical domain"
            );
            MedicalDomainConfig::bundled()?
        };

        config.validate()?;
        Self::from_config(&config)
    }

    /// Shared instance of the bundled medical domain, built on first use
    pub fn bundled() -> Result<Arc<Self>> {
        BUNDLED
            .get_or_try_init(|| -> Result<Arc<Self>> {
                let config = MedicalDomainConfig::bundled()?;
                config.validate()?;
                Self::from_config(&config).map(Arc::new)
            })
            .cloned()
    }

    pub fn matcher(&self) -> TermMatcher<'_> {
        TermMatcher::new(&self.glossary)
    }

    pub fn composer(&self) -> AnnotationComposer<'_> {
        AnnotationComposer::new(&self.glossary, &self.departments, &self.visual_aids)
    }

    /// Terms in the source text, then their localized annotation
    pub fn annotate(&self, request: &AnnotationRequest) -> AnnotationResult {
        let terms: BTreeSet<Term> = self
            .matcher()
            .find_terms(&request.text, request.source_language);
        self.composer().compose(&terms, request.target_language)
    }

    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    pub fn glossary(&self) -> &GlossaryStore {
        &self.glossary
    }

    pub fn departments(&self) -> &DepartmentMap {
        &self.departments
    }

    pub fn visual_aids(&self) -> &VisualAidMap {
        &self.visual_aids
    }
}
