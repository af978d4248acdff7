//! Calendar behaviour of the DD-MM-YYYY normalizer.

use chrono::{Datelike, NaiveDate};
use contracts::shared::date_normalizer::{normalize, InvalidDateReason};
use proptest::prelude::*;

fn ok(input: &str) -> String {
    normalize(input)
        .expect("valid date")
        .expect("present date")
        .into_string()
}

#[test]
fn documented_examples() {
    assert_eq!(ok("5-3-2024"), "2024-03-05");
    assert_eq!(ok("29-02-2024"), "2024-02-29");
    assert!(normalize("29-02-2023").is_err());
    assert!(normalize("31-04-2024").is_err());
    assert!(normalize("12-13-2024").is_err());
    assert_eq!(
        normalize("1-1-24").unwrap_err().reason,
        InvalidDateReason::TwoDigitYear
    );
    assert_eq!(normalize(""), Ok(None));
}

#[test]
fn agrees_with_chrono_for_every_day_of_sample_years() {
    for year in [1, 1600, 1900, 2000, 2023, 2024, 2100, 9999] {
        for month in 1..=12u32 {
            for day in 1..=32u32 {
                let input = format!("{}-{}-{:04}", day, month, year);
                let expected = NaiveDate::from_ymd_opt(year as i32, month, day);
                match expected {
                    Some(date) => assert_eq!(
                        ok(&input),
                        date.format("%Y-%m-%d").to_string(),
                        "{input}"
                    ),
                    None => assert!(normalize(&input).is_err(), "{input} should be rejected"),
                }
            }
        }
    }
}

#[test]
fn day_month_order_is_fixed() {
    // 03-05 is the 3rd of May, never March 5th
    assert_eq!(ok("03-05-2024"), "2024-05-03");
}

proptest! {
    #[test]
    fn round_trips_valid_dates(days in 0i64..3_652_059) {
        // 0001-01-01 ..= 9999-12-31
        let date = NaiveDate::from_ymd_opt(1, 1, 1).unwrap() + chrono::Duration::days(days);
        let input = format!("{}/{}/{:04}", date.day(), date.month(), date.year());
        let expected = format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day());
        prop_assert_eq!(ok(&input), expected);
    }

    #[test]
    fn never_panics(input in "\\PC{0,16}") {
        let _ = normalize(&input);
    }

    #[test]
    fn output_is_always_a_real_date(d in 0u32..40, m in 0u32..15, y in 1u32..10000) {
        if let Ok(Some(date)) = normalize(&format!("{d}.{m}.{y:04}")) {
            prop_assert!(date.to_naive_date().is_some());
        }
    }
}
