//! PDF text extraction — pluggable, trait-based so the HTTP layer can be
//! tested without real PDF fixtures.
//!
//! Default: `PdfTextExtractor` (pdf-extract, run on the blocking pool).
//! `AppState` holds an `Arc<dyn TextExtractor>`.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Parse(String),

    #[error("PDF parser crashed: {0}")]
    Crashed(String),
}

/// Converts raw PDF bytes into plain text. Best-effort: no layout is kept.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractionError>;
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf: Bytes) -> Result<String, ExtractionError> {
        let size = pdf.len();
        // pdf-extract is CPU-bound and can panic on malformed input; the
        // blocking task contains both.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
            .await
            .map_err(|e| ExtractionError::Crashed(e.to_string()))?
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        debug!(bytes = size, chars = text.chars().count(), "PDF text extracted");
        Ok(text)
    }
}
