//! Error types for the cyfra-core library.

use thiserror::Error;

/// Main error type for the cyfra library.
#[derive(Error, Debug)]
pub enum CyfraError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Field schema error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Report rendering error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while constructing a field schema.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema has no fields.
    #[error("schema has no fields")]
    Empty,

    /// A field name is blank.
    #[error("field name must not be blank")]
    BlankField,

    /// A field name appears more than once.
    #[error("duplicate field: {0}")]
    DuplicateField(String),

    /// A label rule names a field that is not in the schema.
    #[error("label rule refers to unknown field: {0}")]
    UnknownField(String),

    /// A field the extractor derives itself is missing from the schema.
    #[error("schema is missing required field: {0}")]
    MissingRequired(&'static str),

    /// A label phrase is blank.
    #[error("blank label for field {0}")]
    BlankLabel(String),
}

/// Errors related to report rendering.
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered bytes were not valid UTF-8.
    #[error("invalid UTF-8 in report: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Flushing the in-memory writer failed.
    #[error("failed to flush report: {0}")]
    Flush(String),
}

/// Result type for the cyfra library.
pub type Result<T> = std::result::Result<T, CyfraError>;
