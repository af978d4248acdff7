/// Utilities for date and time formatting
///
/// Backend timestamps are RFC 3339; dates of birth are canonical `YYYY-MM-DD`.
/// Display uses the day-first order the form accepts.
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Format an RFC 3339 timestamp in the browser's local time zone.
/// Example: "2024-03-15T14:02:26Z" -> "15-03-2024 19:32" (in UTC+05:30)
pub fn format_datetime(datetime_str: &str) -> String {
    format_datetime_in(datetime_str, &Local)
}

/// Same as [`format_datetime`] for an explicit time zone. Unparseable input
/// is returned unchanged.
pub fn format_datetime_in<Tz>(datetime_str: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(datetime_str.trim()) {
        Ok(dt) => dt.with_timezone(tz).format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format a canonical date for display.
/// Example: "1990-03-05" -> "05-03-1990"
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%d-%m-%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26.123Z", &Utc),
            "15-03-2024 14:02"
        );
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26Z", &ist),
            "15-03-2024 19:32"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("1990-03-05"), "05-03-1990");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("5-3-1990"), "5-3-1990");
    }
}
