//! Common regex patterns for complaint extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"[\w.-]+@[\w.-]+\.\w+"
    ).unwrap();

    // "Complaint Accepted Date 12/3/2024 10:15:32 AM"
    pub static ref ACCEPTED_TIMESTAMP: Regex = Regex::new(
        r"(?i)complaint accepted date\s*(\d{1,2}/\d{1,2}/\d{4})\s*(\d{1,2}:\d{2}:\d{2}\s*[AP]M)"
    ).unwrap();

    // Any slash date in the document counts as a transaction date
    pub static ref TRANSACTION_DATE: Regex = Regex::new(
        r"(\d{1,2})/(\d{1,2})/(\d{4})"
    ).unwrap();

    // Date shapes accepted by normalize_date
    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?[\s\-./,]*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[\s\-./,]*(\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME_DAY: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[\s\-./]*(\d{1,2})(?:st|nd|rd|th)?,?[\s\-./]*(\d{4})\b"
    ).unwrap();
}
