//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{Result, TextExtractor};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor.
///
/// lopdf decodes the document (and removes empty-password encryption),
/// pdf-extract produces the per-page text.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    config: PdfConfig,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Decode the document and return bytes pdf-extract can read.
    fn prepare(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let bytes = if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(bytes)
    }

    /// Per-page text.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        catch_extraction_panic(|| pdf_extract::extract_text_from_mem_by_pages(data))
    }
}

/// Run a pdf-extract call, turning both its errors and its panics on
/// malformed documents into [`PdfError::TextExtraction`].
fn catch_extraction_panic<T, E, F>(extract: F) -> Result<T>
where
    E: std::fmt::Display,
    F: FnOnce() -> std::result::Result<T, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(extract)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
        Err(_) => Err(PdfError::TextExtraction(
            "text extraction panicked (malformed document)".to_string(),
        )),
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let bytes = self.prepare(data)?;
        let mut pages = self.extract_pages(&bytes)?;

        if self.config.max_pages > 0 && pages.len() > self.config.max_pages {
            warn!(
                "Reading only {} of {} pages",
                self.config.max_pages,
                pages.len()
            );
            pages.truncate(self.config.max_pages);
        }

        for (i, page) in pages.iter().enumerate() {
            trace!("Page {}: {} chars", i + 1, page.len());
        }

        let text = linearize_pages(&pages);
        debug!("Extracted {} chars from {} pages", text.len(), pages.len());
        Ok(text)
    }
}

/// Join page texts in order, each non-empty page preceded by a newline.
pub fn linearize_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push('\n');
        text.push_str(page);
    }
    text
}
