//! Rule-based field extractors and value normalizers for complaint documents.

pub mod amounts;
pub mod dates;
pub mod labels;
pub mod patterns;
pub mod status;
pub mod text;

pub use amounts::{format_rupees, normalize_amount};
pub use dates::{
    extract_accepted, format_date, normalize_date, parse_date, summarize_transactions,
    AcceptedTimestamp, DateExtractor, TransactionSummary,
};
pub use labels::{match_line, strip_label, LabelMatch};
pub use status::{infer_statuses, Statuses};
pub use text::{clean_value, split_lines, EmailExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
