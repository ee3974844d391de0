//! Line splitting, value cleanup, and email lookup.

use super::patterns::{EMAIL, WHITESPACE};
use super::{ExtractionMatch, FieldExtractor};

/// Collapse whitespace runs to one space and strip surrounding ` `, `:` and `-`.
pub fn clean_value(value: &str) -> String {
    WHITESPACE
        .replace_all(value, " ")
        .trim_matches(&[' ', ':', '-'][..])
        .to_string()
}

/// Trimmed, non-empty lines, split on every Unicode line boundary.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Finds `local@domain` addresses anywhere in the text.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str()).with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}
