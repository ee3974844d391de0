//! Document analysis: PDF bytes to complaint records, one or many at a time.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::complaint::{ComplaintParser, ExtractionResult, RuleBasedParser};
use crate::error::{PdfError, SchemaError};
use crate::models::config::CyfraConfig;
use crate::models::record::Record;
use crate::models::schema::FieldSchema;
use crate::pdf::{PdfExtractor, TextExtractor};

/// A named input document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Display name, usually the file name.
    pub name: String,
    /// Raw PDF bytes.
    pub data: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// A document that produced a record.
#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub name: String,
    pub result: ExtractionResult,
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub name: String,
    pub error: String,
}

/// Outcome of a batch: successes in input order plus per-document failures.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub documents: Vec<AnalyzedDocument>,
    pub failures: Vec<DocumentFailure>,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's result.
    pub fn push<E: fmt::Display>(&mut self, name: impl Into<String>, result: Result<ExtractionResult, E>) {
        let name = name.into();
        match result {
            Ok(result) => self.documents.push(AnalyzedDocument { name, result }),
            Err(e) => {
                warn!("Failed to process {}: {}", name, e);
                self.failures.push(DocumentFailure {
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Records of the successful documents, in input order.
    pub fn records(&self) -> Vec<Record> {
        self.documents
            .iter()
            .map(|doc| doc.result.record.clone())
            .collect()
    }

    /// True when no document produced a record.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total(&self) -> usize {
        self.documents.len() + self.failures.len()
    }
}

/// Text extraction plus field extraction for whole documents.
pub struct ComplaintAnalyzer<E = PdfExtractor> {
    extractor: E,
    parser: RuleBasedParser,
}

impl ComplaintAnalyzer<PdfExtractor> {
    /// Analyzer with the default PDF extractor and standard schema.
    pub fn new() -> Self {
        Self::with_extractor(PdfExtractor::new(), RuleBasedParser::default())
    }

    /// Analyzer configured from [`CyfraConfig`].
    pub fn from_config(config: &CyfraConfig) -> Result<Self, SchemaError> {
        let schema = config.extraction.schema()?;
        let parser =
            RuleBasedParser::new(schema).with_missing_warnings(config.extraction.warn_on_missing);
        Ok(Self::with_extractor(
            PdfExtractor::with_config(config.pdf.clone()),
            parser,
        ))
    }
}

impl Default for ComplaintAnalyzer<PdfExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> ComplaintAnalyzer<E> {
    pub fn with_extractor(extractor: E, parser: RuleBasedParser) -> Self {
        Self { extractor, parser }
    }

    pub fn schema(&self) -> &FieldSchema {
        self.parser.schema()
    }

    /// Linearized text of one document.
    pub fn extract_text(&self, data: &[u8]) -> Result<String, PdfError> {
        let text = self.extractor.extract_text(data)?;
        if text.trim().is_empty() {
            debug!("Document has no extractable text");
        }
        Ok(text)
    }

    /// Parse already extracted text.
    pub fn parse_text(&self, text: &str) -> ExtractionResult {
        self.parser.parse(text)
    }

    /// Extract text from one document and parse it.
    pub fn analyze(&self, data: &[u8]) -> Result<ExtractionResult, PdfError> {
        let text = self.extract_text(data)?;
        Ok(self.parse_text(&text))
    }

    /// Read and analyze a PDF file.
    pub fn analyze_file(&self, path: &Path) -> crate::Result<ExtractionResult> {
        let data = fs::read(path)?;
        Ok(self.analyze(&data)?)
    }

    /// Analyze every document; a failing document never stops the others.
    pub fn analyze_batch<I>(&self, documents: I) -> BatchOutcome
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let mut outcome = BatchOutcome::new();
        for doc in documents {
            let result = self.analyze(&doc.data);
            outcome.push(doc.name, result);
        }

        debug!(
            "Batch finished: {} succeeded, {} failed",
            outcome.documents.len(),
            outcome.failures.len()
        );
        outcome
    }
}
