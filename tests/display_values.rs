//! Scenario tests for the display-value pipelines.
//!
//! The date expectations are environment-independent by construction: the
//! parser pins everything to UTC and chrono renders English month names, so
//! the exact strings are stable across machines.

use optfmt::control::parse_integer;
use optfmt::display::{
    FileMetadata, format_date, parse_submission_date, software_display_value,
    submission_date_display_value,
};
use rstest::rstest;

fn metadata(application: Option<&str>, app_version: Option<&str>) -> FileMetadata {
    FileMetadata {
        application: application.map(String::from),
        app_version: app_version.map(String::from),
    }
}

#[rstest]
#[case(None, None, "-")]
#[case(None, Some("3.0.0"), "-")]
#[case(Some("MS Word"), None, "-")]
#[case(Some("MS Word"), Some(""), "-")]
#[case(Some(""), Some("3.0.0"), "-")]
#[case(Some("MS Word"), Some("3.0.0"), "MS Word 3.0.0")]
fn software_display_value_is_all_or_nothing(
    #[case] application: Option<&str>,
    #[case] app_version: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(
        software_display_value(&metadata(application, app_version)),
        expected
    );
}

#[rstest]
#[case("", "-")]
#[case("not a date", "-")]
#[case("2020-13-45", "-")]
#[case("2020-01-01", "January 1, 2020, 12:00 AM UTC")]
#[case("2020-01-01T15:30:00+02:00", "January 1, 2020, 01:30 PM UTC")]
fn submission_date_display_value_parses_or_falls_back(
    #[case] raw: &str,
    #[case] expected: &str,
) {
    assert_eq!(submission_date_display_value(raw), expected);
}

#[rstest]
fn formatted_date_has_the_long_form_structure() {
    let date = parse_submission_date("2019-12-31T19:00:00Z").unwrap();
    let formatted = format_date(&date);

    assert_eq!(formatted, "December 31, 2019, 07:00 PM UTC");
    // Structural components: month name, day, year, hh:mm, marker, zone.
    assert!(formatted.contains("December"));
    assert!(formatted.contains("2019"));
    assert!(formatted.contains("07:00 PM"));
    assert!(formatted.ends_with("UTC"));
}

#[rstest]
fn safe_parse_folds_into_a_display_string() {
    let success = parse_integer("2").fold(
        |failure| failure.to_string(),
        |n| format!("your doubled result is {}", n * 2),
    );
    assert_eq!(success, "your doubled result is 4");

    let failure = parse_integer("asdf").fold(
        |failure| failure.to_string(),
        |n| format!("your doubled result is {}", n * 2),
    );
    assert_eq!(failure, r#"could not parse "asdf" as an integer"#);
}
