//! Date normalization and date-based extraction for complaint documents.

use chrono::NaiveDate;

use super::patterns::{
    ACCEPTED_TIMESTAMP, DATE_DAY_MONTH_NAME, DATE_DMY, DATE_MONTH_NAME_DAY, DATE_YMD,
    TRANSACTION_DATE,
};
use super::{ExtractionMatch, FieldExtractor};

/// Parse the first date found in `value` (day-first) and format it as
/// `DD/MM/YYYY`. Returns an empty string if no valid date is found.
///
/// Two-digit years use a fixed pivot: `00`-`50` are 20xx, `51`-`99` are
/// 19xx. This does not move with the current year, so `15/01/75` is always
/// 1975 even once a rolling window would read it as 2075.
pub fn normalize_date(value: &str) -> String {
    parse_date(value).map(format_date).unwrap_or_default()
}

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Find a date inside free text.
///
/// Numeric dates are read day-first; when that reading is impossible but the
/// month-first one is valid (e.g. `03/25/2024`), the month-first reading wins.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_YMD.captures(value) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if let Some(date) = ymd(year, month, day) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_DMY.captures(value) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = parse_year(&caps[3])?;
        if let Some(date) = day_first(first, second, year) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_DAY_MONTH_NAME.captures(value) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_to_number(&caps[2]);
        let year = parse_year(&caps[3])?;
        if let Some(date) = ymd(year, month, day) {
            return Some(date);
        }
    }

    if let Some(caps) = DATE_MONTH_NAME_DAY.captures(value) {
        let month = month_to_number(&caps[1]);
        let day: u32 = caps[2].parse().ok()?;
        let year = parse_year(&caps[3])?;
        return ymd(year, month, day);
    }

    None
}

/// Day-first reading of `first/second/year`, month-first as fallback.
pub fn day_first(first: u32, second: u32, year: i32) -> Option<NaiveDate> {
    ymd(year, second, first).or_else(|| ymd(year, first, second))
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Four-digit years as written, two-digit years against the fixed pivot.
fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 {
        // Two-digit year: 00-50 is 20xx, 51-99 is 19xx
        Some(if year <= 50 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}

fn month_to_number(month: &str) -> u32 {
    match month.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

/// Extracts every `D/M/YYYY` date in a document.
///
/// Matches that are not a valid calendar date are skipped.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in TRANSACTION_DATE.captures_iter(text) {
            let (Some(full_match), Ok(first), Ok(second), Ok(year)) = (
                caps.get(0),
                caps[1].parse::<u32>(),
                caps[2].parse::<u32>(),
                caps[3].parse::<i32>(),
            ) else {
                continue;
            };

            if let Some(date) = day_first(first, second, year) {
                results.push(
                    ExtractionMatch::new(date, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Acceptance date and time from the `Complaint Accepted Date` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedTimestamp {
    /// Normalized date, empty if the matched date is not a valid day.
    pub date: String,
    /// Time exactly as written.
    pub time: String,
}

/// Find `complaint accepted date <date> <time AM/PM>` anywhere in the text.
pub fn extract_accepted(text: &str) -> Option<AcceptedTimestamp> {
    ACCEPTED_TIMESTAMP.captures(text).map(|caps| AcceptedTimestamp {
        date: normalize_date(&caps[1]),
        time: caps[2].to_string(),
    })
}

/// Transaction dates found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    /// Number of valid dates.
    pub count: usize,
    /// Earliest date.
    pub first: NaiveDate,
    /// Latest date.
    pub last: NaiveDate,
}

impl TransactionSummary {
    /// `DD/MM/YYYY - DD/MM/YYYY`.
    pub fn range(&self) -> String {
        format!("{} - {}", format_date(self.first), format_date(self.last))
    }
}

/// Count the document's dates and find their span. `None` if there are none.
pub fn summarize_transactions(text: &str) -> Option<TransactionSummary> {
    let dates: Vec<NaiveDate> = DateExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect();

    let first = dates.iter().min().copied()?;
    let last = dates.iter().max().copied()?;

    Some(TransactionSummary {
        count: dates.len(),
        first,
        last,
    })
}
