//! Consolidated report rendering.
//!
//! One row per record, prefixed with a document label column (`PDF_1`,
//! `PDF_2`, ...). Columns follow the schema's field order.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::ReportError;
use crate::models::config::ReportConfig;
use crate::models::record::{Record, NULL_MARKER};
use crate::models::schema::FieldSchema;

/// Header of the document label column, whatever the row label prefix.
pub const LABEL_COLUMN: &str = "PDF";

/// Output format of a consolidated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array of objects.
    Json,
    /// Fixed-width text table.
    Table,
}

/// Renders records as a consolidated report.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    fields: Vec<String>,
    label_prefix: String,
    max_column_width: usize,
}

impl ReportBuilder {
    /// Builder for the schema's field order with default settings.
    pub fn new(schema: &FieldSchema) -> Self {
        Self::with_config(schema, &ReportConfig::default())
    }

    pub fn with_config(schema: &FieldSchema, config: &ReportConfig) -> Self {
        Self {
            fields: schema.fields().to_vec(),
            label_prefix: config.label_prefix.clone(),
            max_column_width: config.max_column_width.max(4),
        }
    }

    /// Header row: the label column followed by every field.
    pub fn header(&self) -> Vec<String> {
        std::iter::once(LABEL_COLUMN.to_string())
            .chain(self.fields.iter().cloned())
            .collect()
    }

    /// Label of the `index`-th record (zero based).
    pub fn label(&self, index: usize) -> String {
        format!("{}_{}", self.label_prefix, index + 1)
    }

    /// Data rows, one per record.
    pub fn rows(&self, records: &[Record]) -> Vec<Vec<String>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                std::iter::once(self.label(i))
                    .chain(self.fields.iter().map(|f| value_of(record, f).to_string()))
                    .collect()
            })
            .collect()
    }

    pub fn render(&self, records: &[Record], format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Csv => self.to_csv(records),
            ReportFormat::Json => self.to_json(records),
            ReportFormat::Table => Ok(self.to_table(records)),
        }
    }

    pub fn to_csv(&self, records: &[Record]) -> Result<String, ReportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        wtr.write_record(self.header())?;
        for row in self.rows(records) {
            wtr.write_record(&row)?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ReportError::Flush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn to_json(&self, records: &[Record]) -> Result<String, ReportError> {
        let report = JsonReport {
            builder: self,
            records,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Fixed-width table. Each column is as wide as its longest cell plus
    /// three, capped at the configured maximum; longer cells are cut with `…`.
    pub fn to_table(&self, records: &[Record]) -> String {
        let header = self.header();
        let rows = self.rows(records);

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                let longest = std::iter::once(&header[col])
                    .chain(rows.iter().map(|row| &row[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                (longest + 3).min(self.max_column_width)
            })
            .collect();

        let mut output = String::new();
        output.push_str(&format_line(&header, &widths));
        output.push('\n');
        output.push_str(&"-".repeat(widths.iter().sum::<usize>()));
        output.push('\n');
        for row in &rows {
            output.push_str(&format_line(row, &widths));
            output.push('\n');
        }
        output
    }
}

fn value_of<'r>(record: &'r Record, field: &str) -> &'r str {
    record.get(field).unwrap_or(NULL_MARKER)
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        let fitted = fit_cell(cell, width);
        let padding = width.saturating_sub(fitted.chars().count());
        line.push_str(&fitted);
        line.extend(std::iter::repeat_n(' ', padding));
    }
    line.trim_end().to_string()
}

fn fit_cell(cell: &str, width: usize) -> String {
    if cell.chars().count() < width {
        return cell.to_string();
    }
    let mut cut: String = cell.chars().take(width.saturating_sub(2)).collect();
    cut.push('…');
    cut
}

struct JsonReport<'a> {
    builder: &'a ReportBuilder,
    records: &'a [Record],
}

struct JsonRow<'a> {
    label: String,
    fields: &'a [String],
    record: &'a Record,
}

impl Serialize for JsonReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for (i, record) in self.records.iter().enumerate() {
            seq.serialize_element(&JsonRow {
                label: self.builder.label(i),
                fields: &self.builder.fields,
                record,
            })?;
        }
        seq.end()
    }
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(LABEL_COLUMN, &self.label)?;
        for field in self.fields {
            map.serialize_entry(field, value_of(self.record, field))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{COMPLAINT_ID, STATE};
    use pretty_assertions::assert_eq;

    fn records() -> Vec<Record> {
        let schema = FieldSchema::default();
        vec![
            Record::from_values(&schema, |f| match f {
                COMPLAINT_ID => Some("111"),
                STATE => Some("Kerala"),
                _ => None,
            }),
            Record::from_values(&schema, |f| match f {
                COMPLAINT_ID => Some("222"),
                _ => None,
            }),
        ]
    }

    #[test]
    fn test_header_and_labels() {
        let builder = ReportBuilder::new(&FieldSchema::default());
        let header = builder.header();

        assert_eq!(header.len(), 20);
        assert_eq!(header[0], "PDF");
        assert_eq!(header[1], "Complaint ID");

        let rows = builder.rows(&records());
        assert_eq!(rows[0][0], "PDF_1");
        assert_eq!(rows[1][0], "PDF_2");
        assert_eq!(rows[1][1], "222");
        assert_eq!(rows[1][8], "NULL");
    }

    #[test]
    fn test_csv() {
        let builder = ReportBuilder::new(&FieldSchema::default());
        let csv = builder.to_csv(&records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PDF,Complaint ID,Date Filed,"));
        assert!(lines[1].starts_with("PDF_1,111,NULL,"));
        assert!(lines[1].contains(",Kerala,"));
    }

    #[test]
    fn test_json_keeps_column_order() {
        let builder = ReportBuilder::new(&FieldSchema::default());
        let json = builder.to_json(&records()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["PDF"], "PDF_1");
        assert_eq!(value[0]["State"], "Kerala");

        let pdf = json.find(r#""PDF": "PDF_1""#).unwrap();
        let id = json.find(r#""Complaint ID": "111""#).unwrap();
        let status = json.find(r#""Investigation Status""#).unwrap();
        assert!(pdf < id && id < status);
    }

    #[test]
    fn test_custom_label_prefix() {
        let config = ReportConfig {
            label_prefix: "DOC".to_string(),
            ..ReportConfig::default()
        };
        let builder = ReportBuilder::with_config(&FieldSchema::default(), &config);

        assert_eq!(builder.header()[0], "PDF");
        assert_eq!(builder.rows(&records())[0][0], "DOC_1");

        let csv = builder.to_csv(&records()).unwrap();
        assert!(csv.starts_with("PDF,Complaint ID,"));
        assert!(csv.lines().nth(1).unwrap().starts_with("DOC_1,111,"));

        let json = builder.to_json(&records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["PDF"], "DOC_2");
        assert!(value[0].get("DOC").is_none());

        let table = builder.to_table(&records());
        assert!(table.starts_with("PDF "));
    }

    #[test]
    fn test_table_widths() {
        let config = ReportConfig {
            label_prefix: "PDF".to_string(),
            max_column_width: 10,
        };
        let builder = ReportBuilder::with_config(&FieldSchema::default(), &config);
        let table = builder.to_table(&records());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        // "PDF_1" is 5 chars wide, so the label column is 8
        assert!(lines[0].starts_with("PDF     Complain…"));
        assert!(lines[2].starts_with("PDF_1   111       "));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_fit_cell() {
        assert_eq!(fit_cell("short", 10), "short");
        assert_eq!(fit_cell("exactly10!", 10), "exactly1…");
    }
}
