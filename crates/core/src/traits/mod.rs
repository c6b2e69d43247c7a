//! Collaborator traits
//!
//! The annotation core never performs I/O itself. Translation, language
//! detection and OCR are reached through these traits so that backends can be
//! swapped by configuration and replaced with mocks in tests.
//!
//! ```text
//! Translation:
//!   - Translator: translate text, detect its language
//!
//! Extraction:
//!   - TextExtractor: image bytes → text (OCR)
//! ```

mod extraction;
mod translation;

pub use extraction::TextExtractor;
pub use translation::{LanguageDetection, Translator};
