//! Label prefix matching for `Label: value` lines.

use super::text::clean_value;
use crate::models::schema::LabelRule;

/// One label that matched the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatch<'s> {
    pub field: &'s str,
    /// The rule label that matched, lowercase.
    pub label: &'s str,
    /// Cleaned text after the label.
    pub value: String,
}

/// Every rule label the line starts with, in scan order.
///
/// Callers apply matches in order, so the last one wins.
pub fn match_line<'s>(rules: &'s [LabelRule], line: &str) -> Vec<LabelMatch<'s>> {
    let mut matches = Vec::new();

    for rule in rules {
        for label in &rule.labels {
            if let Some(rest) = strip_label(line, label) {
                matches.push(LabelMatch {
                    field: &rule.field,
                    label,
                    value: clean_value(rest),
                });
            }
        }
    }

    matches
}

/// Case-insensitive prefix strip.
///
/// Compares the lower-cased characters of `line` against the lowercase
/// `label` and returns the remainder of the original line.
pub fn strip_label<'l>(line: &'l str, label: &str) -> Option<&'l str> {
    let mut expected = label.chars().peekable();

    for (idx, c) in line.char_indices() {
        if expected.peek().is_none() {
            return Some(&line[idx..]);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }

    if expected.peek().is_none() {
        Some("")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::standard_labels;

    #[test]
    fn test_strip_label() {
        assert_eq!(strip_label("Mobile: 98765", "mobile"), Some(": 98765"));
        assert_eq!(strip_label("MOBILE NO 98765", "mobile"), Some(" NO 98765"));
        assert_eq!(strip_label("Mobile", "mobile"), Some(""));
        assert_eq!(strip_label("Mob", "mobile"), None);
        assert_eq!(strip_label("My Mobile", "mobile"), None);
    }

    #[test]
    fn test_strip_label_multibyte_remainder() {
        assert_eq!(strip_label("State: केरल", "state"), Some(": केरल"));
    }

    #[test]
    fn test_match_line_standard_labels() {
        let rules = standard_labels();

        let matches = match_line(&rules, "Sub Category of Complaint : UPI Fraud");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field, "Sub-Category");
        assert_eq!(matches[0].value, "UPI Fraud");

        let matches = match_line(&rules, "Category of complaint: Online Financial Fraud");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].field, "Cybercrime Type");
    }

    #[test]
    fn test_match_line_no_label() {
        let rules = standard_labels();
        assert!(match_line(&rules, "Suspect details").is_empty());
    }

    #[test]
    fn test_overlapping_labels_keep_scan_order() {
        let rules = vec![
            LabelRule::new("Complainant Name", &["name"]),
            LabelRule::new("Platform", &["name of platform"]),
        ];

        let matches = match_line(&rules, "Name of Platform: WhatsApp");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].label, "name");
        assert_eq!(matches[0].value, "of Platform: WhatsApp");
        assert_eq!(matches[1].field, "Platform");
        assert_eq!(matches[1].label, "name of platform");
        assert_eq!(matches[1].value, "WhatsApp");
    }
}
