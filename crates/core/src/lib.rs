//! Core traits and types for the medical translation assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (17 languages, English as the canonical one)
//! - Canonical identifiers for glossary terms and clinical departments
//! - Annotation request/result types
//! - Collaborator traits (translation, text extraction)
//! - Error types

pub mod annotation;
pub mod error;
pub mod language;
pub mod traits;

pub use annotation::{AnnotationRequest, AnnotationResult, DepartmentId, LocalizedTerm, Term};
pub use error::{Error, Result};
pub use language::{Language, Script};

// Trait re-exports
pub use traits::{LanguageDetection, TextExtractor, Translator};
