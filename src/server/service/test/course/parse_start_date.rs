use super::*;

use chrono::{NaiveDate, TimeZone};

/// Tests that a date without time means local midnight in the configured zone.
///
/// Expected: 2030-01-15 00:00 Asia/Shanghai is 2030-01-14 16:00 UTC
#[test]
fn date_only_is_local_midnight() {
    let rules = CourseRules {
        timezone: chrono_tz::Asia::Shanghai,
        ..CourseRules::default()
    };

    let parsed = CourseService::parse_start_date("2030-01-15", &rules).unwrap();

    assert_eq!(
        parsed,
        Utc.with_ymd_and_hms(2030, 1, 14, 16, 0, 0).unwrap()
    );
}

/// Tests parsing a date with hours and minutes in UTC.
///
/// Expected: The same wall-clock instant in UTC
#[test]
fn parses_date_and_time() {
    let parsed = CourseService::parse_start_date("2030-06-01 09:30", &CourseRules::default())
        .unwrap();

    let expected = NaiveDate::from_ymd_opt(2030, 6, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
        .and_utc();
    assert_eq!(parsed, expected);
}

/// Tests inputs matching neither accepted format.
///
/// Expected: Err(CourseError::InvalidDateFormat)
#[test]
fn rejects_other_formats() {
    let rules = CourseRules::default();

    for value in ["2030/06/01", "2030-06-01T09:30", "2030-13-01", ""] {
        assert!(
            matches!(
                CourseService::parse_start_date(value, &rules),
                Err(CourseError::InvalidDateFormat)
            ),
            "{value} should be rejected"
        );
    }
}
