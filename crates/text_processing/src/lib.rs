//! Medical term annotation pipeline
//!
//! This crate provides the request path of the assistant:
//! - **Glossary**: multilingual term dictionary with per-language match candidates
//! - **Matching**: longest-first, non-overlapping term detection in free text
//! - **Composition**: localized terms, recommended departments and one visual aid
//! - **Translation**: LibreTranslate client and a pass-through fallback
//! - **Detection**: Unicode-script language detection
//! - **OCR**: Tesseract-backed text extraction
//!
//! # Example
//!
//! ```ignore
//! use medlingo_text_processing::MedicalKnowledge;
//! use medlingo_core::{AnnotationRequest, Language};
//!
//! let knowledge = MedicalKnowledge::bundled()?;
//! let result = knowledge.annotate(&AnnotationRequest::new(
//!     "i have a fever and a headache",
//!     Language::English,
//!     Language::Hindi,
//! ));
//! // localized_terms: बुखार (fever), सिरदर्द (headache)
//! ```

pub mod ocr;
pub mod translation;

mod composer;
mod departments;
mod error;
mod glossary;
mod knowledge;
mod matcher;
mod pipeline;
mod visual_aids;

pub use composer::AnnotationComposer;
pub use departments::DepartmentMap;
pub use error::{Result, TextProcessingError};
pub use glossary::{Candidate, GlossaryStore};
pub use knowledge::MedicalKnowledge;
pub use matcher::{normalize, TermMatcher};
pub use pipeline::{AnnotationPipeline, TranslationOutcome};
pub use visual_aids::VisualAidMap;

// Re-export key types
pub use ocr::{create_extractor, TesseractExtractor};
pub use translation::{
    create_translator, LibreTranslateTranslator, NoopTranslator, ScriptDetector,
};
