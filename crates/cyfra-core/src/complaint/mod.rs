//! Complaint field extraction module.

mod parser;
pub mod rules;

pub use parser::{ComplaintParser, ExtractionResult, RuleBasedParser};

use crate::models::record::Record;

/// Trait for complaint field extractors.
pub trait ComplaintExtractor {
    /// Extract a complete record from plain text.
    fn extract_from_text(&self, text: &str) -> Record;
}
