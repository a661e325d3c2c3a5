//! Plain-text extraction from uploaded PDF documents.

use async_trait::async_trait;

use crate::errors::AppError;

/// Extracts text from a PDF, one string per page. Behind a trait so the
/// pipelines can be tested without real PDF bytes.
#[async_trait]
pub trait PageTextExtractor: Send + Sync {
    async fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, AppError>;
}

/// Joins per-page text into the single document string the LLM prompts
/// receive. Pages are separated by a blank line.
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n\n")
}

/// Production backend over the `pdf-extract` crate. Extraction is CPU-bound,
/// so it runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractBackend;

#[async_trait]
impl PageTextExtractor for PdfExtractBackend {
    async fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, AppError> {
        let bytes = bytes.to_vec();
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))?
        .map_err(|e| AppError::Validation(format!("Could not read the uploaded PDF: {e}")))?;

        Ok(pages)
    }
}
