//! Calendar date handling
//!
//! Extracted claim documents carry dates as free-form strings. This module
//! decides whether such a string denotes a real calendar date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors related to temporal values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Unparseable date: {0:?}")]
    UnparseableDate(String),
}

/// Date-only layouts, tried in order. Month names match in full or
/// abbreviated form.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%b-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%A, %d %B %Y",
];

/// Date-time layouts without offset, tried in order
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%B %d, %Y %I:%M %p",
    "%B %d, %Y %H:%M",
];

/// Month-year layouts, resolved to the first of the month
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%B %Y", "%B, %Y"];

/// Years written with fewer digits are not accepted
const MIN_YEAR: i32 = 1000;

/// Parses a calendar date from the shapes document extraction commonly yields.
///
/// Accepts ISO dates and date-times (with or without offset), dotted and
/// slashed layouts, US dates with 12- or 24-hour times, month names with or
/// without a weekday, `15-Jan-2024`, month-year (`2024-03`, `March 2024`)
/// and a bare year, both taken as the first day of the period, and RFC 2822.
/// Impossible dates such as `2024-02-30` are rejected, as are years with
/// fewer than four digits.
///
/// # Examples
///
/// ```
/// use core_kernel::temporal::parse_calendar_date;
///
/// let date = parse_calendar_date("January 15, 2024").unwrap();
/// assert_eq!(date.to_string(), "2024-01-15");
/// assert_eq!(parse_calendar_date("March 2024").unwrap().to_string(), "2024-03-01");
/// assert!(parse_calendar_date("not a date").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, TemporalError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(TemporalError::UnparseableDate(input.to_string()));
    }

    parse_year(value)
        .or_else(|| parse_month(value))
        .or_else(|| parse_date(value))
        .or_else(|| parse_date_time(value))
        .ok_or_else(|| TemporalError::UnparseableDate(input.to_string()))
}

/// Returns true if the input denotes a valid calendar date
pub fn is_calendar_date(input: &str) -> bool {
    parse_calendar_date(input).is_ok()
}

fn parse_year(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1).filter(has_full_year)
}

fn parse_month(value: &str) -> Option<NaiveDate> {
    let with_day = format!("{value} 01");
    MONTH_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDate::parse_from_str(&with_day, &format!("{format} %d"))
                .ok()
                .filter(has_full_year)
        })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok().filter(has_full_year))
}

fn parse_date_time(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .filter(has_full_year)
        .or_else(|| {
            DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(value, format)
                    .ok()
                    .map(|dt| dt.date())
                    .filter(has_full_year)
            })
        })
        .or_else(|| {
            DateTime::parse_from_rfc2822(value)
                .map(|dt| dt.date_naive())
                .ok()
                .filter(has_full_year)
        })
}

fn has_full_year(date: &NaiveDate) -> bool {
    date.year() >= MIN_YEAR
}
