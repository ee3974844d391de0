//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};

use std::path::Path;

use super::schema::{FieldSchema, LabelRule};
use crate::error::{CyfraError, Result, SchemaError};

/// Main configuration for the cyfra pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyfraConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report rendering configuration.
    pub report: ReportConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty user password on encrypted documents.
    pub decrypt_empty_password: bool,

    /// Maximum pages to read text from (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            max_pages: 0,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Replacement label vocabulary. `None` uses the built-in labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelRule>>,

    /// Collect a warning for every field left as NULL.
    pub warn_on_missing: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            labels: None,
            warn_on_missing: true,
        }
    }
}

impl ExtractionConfig {
    /// Build the field schema this configuration describes.
    pub fn schema(&self) -> std::result::Result<FieldSchema, SchemaError> {
        match &self.labels {
            Some(labels) => FieldSchema::with_labels(labels.clone()),
            None => Ok(FieldSchema::default()),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Prefix of the document label column (`PDF` gives `PDF_1`, `PDF_2`, ...).
    pub label_prefix: String,

    /// Widest column of the text table.
    pub max_column_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_prefix: "PDF".to_string(),
            max_column_width: 45,
        }
    }
}

impl CyfraConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CyfraError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| CyfraError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::MOBILE_NUMBER;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CyfraConfig = serde_json::from_str(r#"{"report": {"label_prefix": "DOC"}}"#).unwrap();

        assert_eq!(config.report.label_prefix, "DOC");
        assert_eq!(config.report.max_column_width, 45);
        assert!(config.pdf.decrypt_empty_password);
        assert!(config.extraction.labels.is_none());
    }

    #[test]
    fn test_custom_labels_build_schema() {
        let config: CyfraConfig = serde_json::from_str(
            r#"{"extraction": {"labels": [{"field": "Mobile Number", "labels": ["Phone"]}]}}"#,
        )
        .unwrap();

        let schema = config.extraction.schema().unwrap();
        assert_eq!(schema.labels().len(), 1);
        assert_eq!(schema.labels()[0].field, MOBILE_NUMBER);
        assert_eq!(schema.labels()[0].labels, vec!["phone".to_string()]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CyfraConfig::default();
        config.pdf.max_pages = 3;
        config.save(&path).unwrap();

        assert_eq!(CyfraConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(CyfraConfig::from_file(&path), Err(CyfraError::Config(_))));
        assert!(matches!(
            CyfraConfig::from_file(&dir.path().join("missing.json")),
            Err(CyfraError::Io(_))
        ));
    }
}
