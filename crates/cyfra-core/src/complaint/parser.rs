//! Rule-based complaint parser.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info, trace};

use crate::models::record::Record;
use crate::models::schema::{
    FieldSchema, AMOUNT_LOST, COMPLAINT_STATUS, DATE_ACCEPTED, DATE_FILED, DATE_RANGE, EMAIL,
    FIR_STATUS, INVESTIGATION_STATUS, TIME_ACCEPTED, TRANSACTION_COUNT,
};

use super::rules::{
    extract_accepted, infer_statuses, match_line, normalize_amount, normalize_date, split_lines,
    summarize_transactions, EmailExtractor, FieldExtractor, Statuses,
};
use super::ComplaintExtractor;

/// Result of complaint extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The complete record.
    pub record: Record,
    /// Statuses before they were rendered into the record.
    pub statuses: Statuses,
    /// Fields that could not be extracted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for complaint parsing.
pub trait ComplaintParser {
    /// Parse a complaint from linearized document text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser driven by label prefixes, targeted patterns and keyword statuses.
///
/// Never fails: anything that cannot be found or normalized ends up as the
/// NULL marker in the record.
#[derive(Debug, Clone)]
pub struct RuleBasedParser {
    schema: FieldSchema,
    warn_on_missing: bool,
}

impl RuleBasedParser {
    /// Create a parser for the given schema.
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            schema,
            warn_on_missing: true,
        }
    }

    /// Collect a warning for every field left as NULL.
    pub fn with_missing_warnings(mut self, warn: bool) -> Self {
        self.warn_on_missing = warn;
        self
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    fn extract_labelled<'s>(&'s self, text: &str, values: &mut HashMap<&'s str, String>) {
        for line in split_lines(text) {
            for found in match_line(self.schema.labels(), line) {
                trace!("Label '{}' -> {}", found.label, found.field);
                values.insert(found.field, found.value);
            }
        }
    }

    fn extract_email(&self, text: &str, values: &mut HashMap<&str, String>) {
        if values.get(EMAIL).is_some_and(|v| !v.is_empty()) {
            return;
        }
        if let Some(email) = EmailExtractor::new().extract(text) {
            debug!("Email taken from free text at {:?}", email.position);
            values.insert(EMAIL, email.value);
        }
    }

    fn extract_transactions(&self, text: &str, values: &mut HashMap<&str, String>) {
        match summarize_transactions(text) {
            Some(summary) => {
                values.insert(TRANSACTION_COUNT, summary.count.to_string());
                values.insert(DATE_RANGE, summary.range());
            }
            None => {
                values.insert(TRANSACTION_COUNT, String::new());
            }
        }
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new(FieldSchema::default())
    }
}

impl ComplaintParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing complaint from {} characters of text", text.len());

        // Every schema field starts out empty
        let mut values: HashMap<&str, String> = self
            .schema
            .fields()
            .iter()
            .map(|field| (field.as_str(), String::new()))
            .collect();

        self.extract_labelled(text, &mut values);
        self.extract_email(text, &mut values);

        // Accepted date and time come from one line
        if let Some(accepted) = extract_accepted(text) {
            values.insert(DATE_ACCEPTED, accepted.date);
            values.insert(TIME_ACCEPTED, accepted.time);
        }

        // Normalize filed date and amount
        let filed = values.get(DATE_FILED).map(|v| normalize_date(v)).unwrap_or_default();
        values.insert(DATE_FILED, filed);
        let amount = values.get(AMOUNT_LOST).map(|v| normalize_amount(v)).unwrap_or_default();
        values.insert(AMOUNT_LOST, amount);

        self.extract_transactions(text, &mut values);

        // Statuses look at the whole text
        let statuses = infer_statuses(text);
        values.insert(COMPLAINT_STATUS, statuses.complaint.to_string());
        values.insert(FIR_STATUS, statuses.fir.to_string());
        values.insert(INVESTIGATION_STATUS, statuses.investigation.to_string());

        // Anything still empty becomes NULL
        let record = Record::from_values(&self.schema, |field| values.get(field).map(String::as_str));

        let warnings: Vec<String> = if self.warn_on_missing {
            record
                .null_fields()
                .into_iter()
                .map(|field| format!("Could not extract {}", field))
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            "Extracted complaint with {} of {} fields filled",
            record.len() - record.null_fields().len(),
            record.len()
        );

        ExtractionResult {
            record,
            statuses,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl ComplaintExtractor for RuleBasedParser {
    fn extract_from_text(&self, text: &str) -> Record {
        self.parse(text).record
    }
}
