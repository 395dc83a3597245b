//! Date formatting and submission-date parsing.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Long-form display rendering: full month name, day, year, two-digit
/// 12-hour clock with AM/PM, time-zone name.
const DISPLAY_FORMAT: &str = "%B %-d, %Y, %I:%M %p %Z";

/// Formats a date as a long display string.
///
/// Produces e.g. `"December 31, 2019, 07:00 PM UTC"`: year, full month name,
/// day, hour:minute on a two-digit 12-hour clock with an AM/PM marker, and
/// the time-zone name. The zone comes from the datetime itself; month and
/// AM/PM names use chrono's default English rendering. Callers needing a
/// different locale must wrap this function.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use optfmt::display::format_date;
///
/// let date = Utc.with_ymd_and_hms(2019, 12, 31, 19, 0, 0).unwrap();
/// assert_eq!(format_date(&date), "December 31, 2019, 07:00 PM UTC");
/// ```
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a raw submission-date string, absent on anything unparsable.
///
/// Accepts two shapes:
///
/// - RFC 3339 timestamps (`"2020-01-01T15:30:00+02:00"`), normalized to UTC
/// - date-only strings (`"2020-01-01"`), read as UTC midnight
///
/// Anything else yields `None`, so a garbage string falls through to the
/// pipeline's fallback instead of formatting a nonsense date.
///
/// # Examples
///
/// ```rust
/// use optfmt::display::parse_submission_date;
///
/// assert!(parse_submission_date("2020-01-01").is_some());
/// assert!(parse_submission_date("2020-01-01T15:30:00+02:00").is_some());
/// assert!(parse_submission_date("not a date").is_none());
/// ```
pub fn parse_submission_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long_form() {
        let date = Utc.with_ymd_and_hms(2019, 12, 31, 19, 0, 0).unwrap();
        assert_eq!(format_date(&date), "December 31, 2019, 07:00 PM UTC");
    }

    #[test]
    fn test_format_date_midnight_is_twelve_am() {
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "January 1, 2020, 12:00 AM UTC");
    }

    #[test]
    fn test_format_date_single_digit_day_is_unpadded() {
        let date = Utc.with_ymd_and_hms(2020, 3, 5, 13, 45, 0).unwrap();
        assert_eq!(format_date(&date), "March 5, 2020, 01:45 PM UTC");
    }

    #[test]
    fn test_parse_date_only_reads_utc_midnight() {
        let parsed = parse_submission_date("2020-01-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let parsed = parse_submission_date("2020-01-01T15:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 1, 1, 13, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_submission_date("not a date"), None);
        assert_eq!(parse_submission_date("2020-13-45"), None);
    }
}
