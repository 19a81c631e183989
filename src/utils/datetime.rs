//! Date and time utility functions
//!
//! Calendar dates are rendered as `YYYY-MM-DD` and UTC offsets as `±HH:00`,
//! the two formats node front-ends put next to timestamps.

use chrono::{DateTime, Datelike, Local, NaiveDate, Offset, TimeZone};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a date to a YYYY-MM-DD string.
///
/// Works on anything carrying a calendar date (`NaiveDate`, `NaiveDateTime`,
/// `DateTime<Tz>`); the year, month and day are the ones the value already
/// encodes, no time-zone conversion happens here.
pub fn get_date_string<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    get_date_string(&Local::now().date_naive())
}

/// Whole hours between the offset of `date` and UTC, truncated toward zero.
pub fn utc_offset_hours<Tz: TimeZone>(date: &DateTime<Tz>) -> i32 {
    date.offset().fix().local_minus_utc() / 3600
}

/// Format the UTC offset of `date` as `±HH:00`.
///
/// Non-negative offsets get a `+`, negative ones a `-`, also when the
/// offset is under an hour (`-00:30` renders as `-00:00`). Half-hour and
/// quarter-hour zones lose their minutes: `+05:30` renders as `+05:00`.
pub fn utc_time_offset<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let seconds = date.offset().fix().local_minus_utc();
    let sign = if seconds >= 0 { '+' } else { '-' };
    format!("{}{:02}:00", sign, (seconds / 3600).abs())
}

/// Format the UTC offset of the current local moment as `±HH:00`
pub fn current_utc_offset() -> String {
    utc_time_offset(&Local::now())
}
