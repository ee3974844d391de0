//! Extracted complaint record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::schema::FieldSchema;

/// Value stored for any field with no usable information.
pub const NULL_MARKER: &str = "NULL";

/// A total mapping from every schema field to its display value.
///
/// Entries follow schema order. Fields without a value hold [`NULL_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, String)>,
}

impl Record {
    /// Build a record for `schema`, looking each field up with `value_of`.
    ///
    /// Missing or empty values become [`NULL_MARKER`].
    pub fn from_values<'a, F>(schema: &FieldSchema, mut value_of: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        let entries = schema
            .fields()
            .iter()
            .map(|field| {
                let value = match value_of(field) {
                    Some(v) if !v.is_empty() => v.to_string(),
                    _ => NULL_MARKER.to_string(),
                };
                (field.clone(), value)
            })
            .collect();

        Self { entries }
    }

    /// A record where every field is [`NULL_MARKER`].
    pub fn empty(schema: &FieldSchema) -> Self {
        Self::from_values(schema, |_| None)
    }

    /// Value of a field, `None` if the field is not in the schema.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a field holds the null marker.
    pub fn is_null(&self, field: &str) -> bool {
        self.get(field) == Some(NULL_MARKER)
    }

    /// Field names in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Fields that ended up without a value.
    pub fn null_fields(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, value)| *value == NULL_MARKER)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{EMAIL, STATE};

    #[test]
    fn test_empty_values_become_null() {
        let schema = FieldSchema::default();
        let record = Record::from_values(&schema, |field| match field {
            STATE => Some("Kerala"),
            EMAIL => Some(""),
            _ => None,
        });

        assert_eq!(record.len(), 19);
        assert_eq!(record.get(STATE), Some("Kerala"));
        assert_eq!(record.get(EMAIL), Some("NULL"));
        assert!(record.is_null(EMAIL));
        assert_eq!(record.get("Unknown"), None);
        assert_eq!(record.null_fields().len(), 18);
    }

    #[test]
    fn test_serializes_in_schema_order() {
        let schema = FieldSchema::default();
        let record = Record::empty(&schema);
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.starts_with(r#"{"Complaint ID":"NULL","Date Filed":"NULL""#));
        assert!(json.ends_with(r#""Investigation Status":"NULL"}"#));
    }
}
