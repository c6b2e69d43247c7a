//! Image text extraction via the Tesseract CLI
//!
//! Image bytes go in on stdin and recognized text comes back on stdout:
//! `tesseract stdin stdout -l eng+hin`.

use async_trait::async_trait;
use medlingo_config::OcrConfig;
use medlingo_core::{Error, Result, TextExtractor};
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Tesseract-backed extractor
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    command: String,
    languages: String,
}

impl TesseractExtractor {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            command: config.tesseract_cmd.clone(),
            languages: config.languages.join("+"),
        }
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract_text(&self, image: &[u8]) -> Result<String> {
        if image.is_empty() {
            return Err(Error::Extraction("Empty image".to_string()));
        }

        let mut child = Command::new(&self.command)
            .args(["stdin", "stdout", "-l", &self.languages])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::Backend(format!("Failed to start {}: {}", self.command, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Backend("Tesseract stdin unavailable".to_string()))?;
        let bytes = image.to_vec();
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(&bytes).await;
            drop(stdin);
            result
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| Error::Backend(format!("Tesseract failed: {}", e)))?;

        // A rejected image can close stdin early; the exit status reports that
        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "Tesseract closed stdin before reading the whole image");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Backend(format!(
                "Tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(Error::Extraction("No text found in image".to_string()));
        }

        tracing::debug!(chars = text.chars().count(), "Extracted text from image");
        Ok(text)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}

/// Create extractor based on config
pub fn create_extractor(config: &OcrConfig) -> Arc<dyn TextExtractor> {
    let extractor = TesseractExtractor::new(config);
    tracing::info!(
        command = %config.tesseract_cmd,
        languages = %extractor.languages(),
        "Using Tesseract OCR"
    );
    Arc::new(extractor)
}
