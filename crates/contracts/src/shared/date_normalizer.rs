//! Day-month-year date normalization.
//!
//! Form input arrives as `DD-MM-YYYY` (separators `-`, `/` or `.`, single
//! digit day/month allowed) and leaves as a [`CanonicalDate`] in
//! `YYYY-MM-DD` form. Segment order is fixed and two-digit years are always
//! rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message shown to the user for any rejected date.
pub const INVALID_DATE_MESSAGE: &str = "DOB must be in DD-MM-YYYY format and a valid date.";

const SEPARATORS: [char; 3] = ['-', '/', '.'];

/// Why a date string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDateReason {
    SegmentCount,
    TwoDigitYear,
    YearLength,
    NotANumber,
    MonthOutOfRange,
    DayOutOfRange,
    /// Stored value is not in `YYYY-MM-DD` shape.
    NotCanonical,
}

/// Rejection of a non-empty date string.
///
/// Display is the same for every reason; `reason` is there for callers that
/// want to tell a malformed string from an impossible date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", INVALID_DATE_MESSAGE)]
pub struct InvalidDate {
    pub reason: InvalidDateReason,
}

impl InvalidDate {
    fn new(reason: InvalidDateReason) -> Self {
        Self { reason }
    }
}

/// A validated `YYYY-MM-DD` date.
///
/// Built by [`normalize`] from form input, or from an already canonical
/// string through `TryFrom`, which deserialization goes through as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalDate(String);

impl TryFrom<String> for CanonicalDate {
    type Error = InvalidDate;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(InvalidDate::new(InvalidDateReason::NotCanonical));
        }

        let year = parse_number(&value[0..4])?;
        let month = parse_number(&value[5..7])?;
        let day = parse_number(&value[8..10])?;
        check_calendar(day, month, year)?;
        Ok(Self(value))
    }
}

impl From<CanonicalDate> for String {
    fn from(date: CanonicalDate) -> Self {
        date.0
    }
}

impl CanonicalDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Four-digit years are always inside chrono's range, so this is `Some`
    /// for every value `normalize` produces.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Normalize a `DD-MM-YYYY` string.
///
/// Returns `Ok(None)` for empty or whitespace-only input, which callers treat
/// as "not provided" rather than invalid.
pub fn normalize(input: &str) -> Result<Option<CanonicalDate>, InvalidDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let segments: Vec<&str> = trimmed
        .split(|c: char| SEPARATORS.contains(&c))
        .collect::<Vec<_>>();
    // Collapse separator runs: interior empties come from "--", "/." etc.
    let segments = collapse_runs(&segments);
    if segments.len() != 3 {
        return Err(InvalidDate::new(InvalidDateReason::SegmentCount));
    }

    // the year length counts the raw segment, so " 2024" is five characters
    let (day, month, year) = (segments[0].trim(), segments[1].trim(), segments[2]);

    match year.chars().count() {
        2 => return Err(InvalidDate::new(InvalidDateReason::TwoDigitYear)),
        4 => {}
        _ => return Err(InvalidDate::new(InvalidDateReason::YearLength)),
    }

    let day = parse_number(day)?;
    let month = parse_number(month)?;
    let year = parse_number(year)?;

    check_calendar(day, month, year)?;

    Ok(Some(CanonicalDate(format!(
        "{:04}-{:02}-{:02}",
        year, month, day
    ))))
}

/// Drops empty pieces produced by consecutive separators, but keeps leading
/// and trailing empties so "-1-2-2024" and "1-2-2024-" still fail the count.
fn collapse_runs<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .filter(|(i, s)| !s.is_empty() || *i == 0 || *i == last)
        .map(|(_, s)| *s)
        .collect()
}

fn check_calendar(day: u32, month: u32, year: u32) -> Result<(), InvalidDate> {
    if !(1..=12).contains(&month) {
        return Err(InvalidDate::new(InvalidDateReason::MonthOutOfRange));
    }
    if day < 1 || day > days_in_month(month, year) {
        return Err(InvalidDate::new(InvalidDateReason::DayOutOfRange));
    }
    Ok(())
}

fn parse_number(segment: &str) -> Result<u32, InvalidDate> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDate::new(InvalidDateReason::NotANumber));
    }
    segment
        .parse::<u32>()
        .map_err(|_| InvalidDate::new(InvalidDateReason::NotANumber))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> Option<String> {
        normalize(s).ok().flatten().map(CanonicalDate::into_string)
    }

    fn reason(s: &str) -> InvalidDateReason {
        normalize(s).unwrap_err().reason
    }

    #[test]
    fn pads_single_digit_day_and_month() {
        assert_eq!(norm("5-3-2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("05/03/2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("5.3.2024").as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn mixed_and_repeated_separators() {
        assert_eq!(norm("5/3.2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("5--3//2024").as_deref(), Some("2024-03-05"));
        assert_eq!(norm("  5-3-2024  ").as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn leap_day() {
        assert_eq!(norm("29-02-2024").as_deref(), Some("2024-02-29"));
        assert_eq!(reason("29-02-2023"), InvalidDateReason::DayOutOfRange);
        assert_eq!(norm("29-02-2000").as_deref(), Some("2000-02-29"));
        assert_eq!(reason("29-02-1900"), InvalidDateReason::DayOutOfRange);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(reason("31-04-2024"), InvalidDateReason::DayOutOfRange);
        assert_eq!(norm("30-04-2024").as_deref(), Some("2024-04-30"));
        assert_eq!(norm("31-12-2024").as_deref(), Some("2024-12-31"));
        assert_eq!(reason("0-1-2024"), InvalidDateReason::DayOutOfRange);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(reason("12-13-2024"), InvalidDateReason::MonthOutOfRange);
        assert_eq!(reason("12-0-2024"), InvalidDateReason::MonthOutOfRange);
    }

    #[test]
    fn year_shapes() {
        assert_eq!(reason("1-1-24"), InvalidDateReason::TwoDigitYear);
        assert_eq!(reason("1-1-202"), InvalidDateReason::YearLength);
        assert_eq!(reason("1-1-20245"), InvalidDateReason::YearLength);
    }

    #[test]
    fn segment_count() {
        assert_eq!(reason("2024-03"), InvalidDateReason::SegmentCount);
        assert_eq!(reason("1-2-3-2024"), InvalidDateReason::SegmentCount);
        assert_eq!(reason("-1-2-2024"), InvalidDateReason::SegmentCount);
        assert_eq!(reason("1-2-2024-"), InvalidDateReason::SegmentCount);
        assert_eq!(reason("01022024"), InvalidDateReason::SegmentCount);
    }

    #[test]
    fn padded_year_segment_is_rejected() {
        assert_eq!(reason("1-1- 2024"), InvalidDateReason::YearLength);
        assert_eq!(norm(" 1 -1-2024").as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn non_numeric() {
        assert_eq!(reason("aa-03-2024"), InvalidDateReason::NotANumber);
        assert_eq!(reason("1-+3-2024"), InvalidDateReason::NotANumber);
        assert_eq!(reason("1-3-20x4"), InvalidDateReason::NotANumber);
    }

    #[test]
    fn absent_is_not_invalid() {
        assert_eq!(normalize(""), Ok(None));
        assert_eq!(normalize("   \t"), Ok(None));
    }

    #[test]
    fn error_message_is_uniform() {
        let a = normalize("1-1-24").unwrap_err();
        let b = normalize("31-04-2024").unwrap_err();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), INVALID_DATE_MESSAGE);
    }

    #[test]
    fn converts_to_chrono() {
        let date = normalize("29-02-2024").unwrap().unwrap();
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-02-29\"");
    }

    #[test]
    fn deserialize_checks_the_calendar() {
        let date: CanonicalDate = serde_json::from_str("\"2024-02-29\"").unwrap();
        assert_eq!(date.as_str(), "2024-02-29");

        assert!(serde_json::from_str::<CanonicalDate>("\"2023-02-30\"").is_err());
        assert!(serde_json::from_str::<CanonicalDate>("\"2024-13-01\"").is_err());
        assert!(serde_json::from_str::<CanonicalDate>("\"29-02-2024\"").is_err());
        assert!(serde_json::from_str::<CanonicalDate>("\"2024-2-29\"").is_err());
        assert_eq!(
            CanonicalDate::try_from("2024/02/29".to_string()).unwrap_err().reason,
            InvalidDateReason::NotCanonical
        );
    }
}
