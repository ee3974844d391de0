//! Field schema and label vocabulary for complaint extraction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

pub const COMPLAINT_ID: &str = "Complaint ID";
pub const DATE_FILED: &str = "Date Filed";
pub const DATE_ACCEPTED: &str = "Date Accepted";
pub const TIME_ACCEPTED: &str = "Time Accepted";
pub const COMPLAINANT_NAME: &str = "Complainant Name";
pub const EMAIL: &str = "Email";
pub const MOBILE_NUMBER: &str = "Mobile Number";
pub const STATE: &str = "State";
pub const DISTRICT: &str = "District";
pub const CYBERCRIME_TYPE: &str = "Cybercrime Type";
pub const SUB_CATEGORY: &str = "Sub-Category";
pub const PLATFORM: &str = "Platform";
pub const SOURCE_BANK: &str = "Source Bank";
pub const AMOUNT_LOST: &str = "Amount Lost";
pub const TRANSACTION_COUNT: &str = "Transaction Count";
pub const DATE_RANGE: &str = "Date Range";
pub const COMPLAINT_STATUS: &str = "Complaint Status";
pub const FIR_STATUS: &str = "FIR Status";
pub const INVESTIGATION_STATUS: &str = "Investigation Status";

/// Report column order of the standard schema.
pub const STANDARD_FIELDS: [&str; 19] = [
    COMPLAINT_ID,
    DATE_FILED,
    DATE_ACCEPTED,
    TIME_ACCEPTED,
    COMPLAINANT_NAME,
    EMAIL,
    MOBILE_NUMBER,
    STATE,
    DISTRICT,
    CYBERCRIME_TYPE,
    SUB_CATEGORY,
    PLATFORM,
    SOURCE_BANK,
    AMOUNT_LOST,
    TRANSACTION_COUNT,
    DATE_RANGE,
    COMPLAINT_STATUS,
    FIR_STATUS,
    INVESTIGATION_STATUS,
];

/// Fields the parser fills or normalizes itself, beyond plain label matches.
pub const DERIVED_FIELDS: [&str; 10] = [
    EMAIL,
    DATE_FILED,
    DATE_ACCEPTED,
    TIME_ACCEPTED,
    AMOUNT_LOST,
    TRANSACTION_COUNT,
    DATE_RANGE,
    COMPLAINT_STATUS,
    FIR_STATUS,
    INVESTIGATION_STATUS,
];

/// Label phrases that identify one field when they start a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    /// Target field name.
    pub field: String,
    /// Lowercase line prefixes, tried in order.
    pub labels: Vec<String>,
}

impl LabelRule {
    pub fn new(field: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            field: field.into(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// The standard label vocabulary, in scan order.
pub fn standard_labels() -> Vec<LabelRule> {
    vec![
        LabelRule::new(COMPLAINT_ID, &["acknowledgement number"]),
        LabelRule::new(DATE_FILED, &["complaint date"]),
        LabelRule::new(CYBERCRIME_TYPE, &["category of complaint"]),
        LabelRule::new(SUB_CATEGORY, &["sub category of complaint"]),
        LabelRule::new(COMPLAINANT_NAME, &["name"]),
        LabelRule::new(EMAIL, &["email", "userid"]),
        LabelRule::new(MOBILE_NUMBER, &["mobile"]),
        LabelRule::new(DISTRICT, &["district"]),
        LabelRule::new(STATE, &["state"]),
        LabelRule::new(AMOUNT_LOST, &["total fraudulent amount"]),
    ]
}

/// Read-only field schema handed to the parser at construction.
///
/// Holds the ordered output fields and the ordered label rules. Rule order
/// is scan order: when several labels match one line, the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<String>,
    labels: Vec<LabelRule>,
}

impl FieldSchema {
    /// Build and validate a schema.
    ///
    /// Labels are lower-cased. Every labelled field and every derived field
    /// must be present in `fields`.
    pub fn new(fields: Vec<String>, labels: Vec<LabelRule>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if field.trim().is_empty() {
                return Err(SchemaError::BlankField);
            }
            if !seen.insert(field.as_str()) {
                return Err(SchemaError::DuplicateField(field.clone()));
            }
        }

        for required in DERIVED_FIELDS {
            if !seen.contains(required) {
                return Err(SchemaError::MissingRequired(required));
            }
        }

        let mut normalized = Vec::with_capacity(labels.len());
        for rule in labels {
            if !seen.contains(rule.field.as_str()) {
                return Err(SchemaError::UnknownField(rule.field));
            }
            let mut phrases = Vec::with_capacity(rule.labels.len());
            for label in &rule.labels {
                if label.trim().is_empty() {
                    return Err(SchemaError::BlankLabel(rule.field.clone()));
                }
                phrases.push(label.to_lowercase());
            }
            normalized.push(LabelRule {
                field: rule.field,
                labels: phrases,
            });
        }

        Ok(Self {
            fields,
            labels: normalized,
        })
    }

    /// The standard 19-field schema with a custom label vocabulary.
    pub fn with_labels(labels: Vec<LabelRule>) -> Result<Self, SchemaError> {
        Self::new(
            STANDARD_FIELDS.iter().map(|f| f.to_string()).collect(),
            labels,
        )
    }

    /// Output fields in report order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Label rules in scan order.
    pub fn labels(&self) -> &[LabelRule] {
        &self.labels
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            fields: STANDARD_FIELDS.iter().map(|f| f.to_string()).collect(),
            labels: standard_labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schema() {
        let schema = FieldSchema::default();
        assert_eq!(schema.len(), 19);
        assert_eq!(schema.fields()[0], "Complaint ID");
        assert_eq!(schema.fields()[18], "Investigation Status");
        assert!(schema.contains(PLATFORM));
        assert_eq!(schema.labels().len(), 10);
    }

    #[test]
    fn test_standard_labels_validate() {
        let schema = FieldSchema::with_labels(standard_labels()).unwrap();
        assert_eq!(schema, FieldSchema::default());
    }

    #[test]
    fn test_labels_are_lowercased() {
        let schema =
            FieldSchema::with_labels(vec![LabelRule::new(MOBILE_NUMBER, &["Phone No"])]).unwrap();
        assert_eq!(schema.labels()[0].labels, vec!["phone no".to_string()]);
    }

    #[test]
    fn test_unknown_label_field() {
        let err = FieldSchema::with_labels(vec![LabelRule::new("Pincode", &["pin"])]).unwrap_err();
        assert_eq!(err, SchemaError::UnknownField("Pincode".to_string()));
    }

    #[test]
    fn test_missing_derived_field() {
        let fields = STANDARD_FIELDS
            .iter()
            .filter(|f| **f != FIR_STATUS)
            .map(|f| f.to_string())
            .collect();
        let err = FieldSchema::new(fields, Vec::new()).unwrap_err();
        assert_eq!(err, SchemaError::MissingRequired(FIR_STATUS));
    }

    #[test]
    fn test_duplicate_field() {
        let mut fields: Vec<String> = STANDARD_FIELDS.iter().map(|f| f.to_string()).collect();
        fields.push(STATE.to_string());
        let err = FieldSchema::new(fields, Vec::new()).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField(STATE.to_string()));
    }

    #[test]
    fn test_blank_label() {
        let err = FieldSchema::with_labels(vec![LabelRule::new(STATE, &["  "])]).unwrap_err();
        assert_eq!(err, SchemaError::BlankLabel(STATE.to_string()));
    }
}
