//! Amount normalization for complaint documents.

/// Keep only the digits of `value` and format them as a rupee amount
/// (`"Rs. 1,23,456"` becomes `"₹123,456"`).
///
/// Returns an empty string when `value` has no digits.
pub fn normalize_amount(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    format_rupees(&digits)
}

/// Format a string of ASCII digits with thousands separators and a `₹` prefix.
///
/// Leading zeros are dropped; works for any number of digits.
pub fn format_rupees(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let integer = if trimmed.is_empty() { "0" } else { trimmed };

    let mut formatted = String::with_capacity(integer.len() + integer.len() / 3 + 3);
    formatted.push('₹');
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping_is_regrouped() {
        assert_eq!(normalize_amount("Rs. 1,23,456"), "₹123,456");
        assert_eq!(normalize_amount("INR 10,00,000/-"), "₹1,000,000");
    }

    #[test]
    fn test_digits_are_preserved() {
        let normalized = normalize_amount("Rs. 1,23,456");
        let digits: String = normalized.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "123456");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(normalize_amount("500"), "₹500");
        assert_eq!(normalize_amount("0"), "₹0");
        assert_eq!(normalize_amount("007"), "₹7");
        assert_eq!(normalize_amount("1000"), "₹1,000");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(normalize_amount(""), "");
        assert_eq!(normalize_amount("Rs. -"), "");
    }

    #[test]
    fn test_large_amount_does_not_overflow() {
        assert_eq!(
            normalize_amount("123456789012345678901234567890"),
            "₹123,456,789,012,345,678,901,234,567,890"
        );
    }
}
