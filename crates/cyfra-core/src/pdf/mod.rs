//! PDF processing module.

mod extractor;

pub use extractor::{linearize_pages, PdfExtractor};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning a document into one linearized text stream.
pub trait TextExtractor {
    /// Extract the text of every page, in page order.
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}
