//! Calendar-date parsing and display formatting.
//!
//! # Responsibility
//! - Convert between the `YYYY-MM-DD` wire/input form and `NaiveDate`.
//! - Render the long human-readable form used by list rendering.

use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` string as entered through the date form field.
///
/// Returns `None` for anything that is not a valid calendar day.
pub fn parse_ymd(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats a date in its long form, e.g. `March 15, 2026`.
///
/// Month names are fixed to English. Display-only; the stored form stays
/// `YYYY-MM-DD`.
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
