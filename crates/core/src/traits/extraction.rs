//! Text extraction (OCR) trait

use async_trait::async_trait;

use crate::Result;

/// Image-to-text interface
///
/// Implementations fail with `Error::Extraction` when the image yields no
/// text at all; an empty string is never returned as success. Failures of
/// the OCR engine itself are reported as `Error::Backend`.
#[async_trait]
pub trait TextExtractor: Send + Sync + 'static {
    /// Extract text from encoded image bytes (PNG, JPEG, ...)
    async fn extract_text(&self, image: &[u8]) -> Result<String>;

    /// Get extractor name for logging
    fn name(&self) -> &str;
}
