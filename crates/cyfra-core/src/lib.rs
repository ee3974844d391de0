//! Core library for cybercrime complaint extraction.
//!
//! This crate provides:
//! - PDF text extraction (with empty-password decryption)
//! - Label-driven field extraction into a fixed 19-field record
//! - Date, amount and status normalization
//! - Consolidated CSV, JSON and text-table reports

pub mod analyzer;
pub mod complaint;
pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use analyzer::{AnalyzedDocument, BatchOutcome, ComplaintAnalyzer, DocumentFailure, SourceDocument};
pub use complaint::{ComplaintExtractor, ComplaintParser, ExtractionResult, RuleBasedParser};
pub use error::{CyfraError, PdfError, ReportError, Result, SchemaError};
pub use models::{CyfraConfig, FieldSchema, LabelRule, Record, NULL_MARKER};
pub use pdf::{PdfExtractor, TextExtractor};
pub use report::{ReportBuilder, ReportFormat, LABEL_COLUMN};
