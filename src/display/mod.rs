//! Display-value pipelines built from the optional-value combinators.
//!
//! Two ready-made formatters for fields that may be missing or empty:
//!
//! - [`software_display_value`]: joins an application name and version into
//!   one string, or a dash when either is absent
//! - [`submission_date_display_value`]: parses and formats a raw date
//!   string, or a dash when it is empty or unparsable
//!
//! Both follow the same linear flow: raw input, falsy check, transform,
//! join, fallback. Every pipeline terminates in a fallback, so the result
//! is always a defined string.

mod date;

pub use date::{format_date, parse_submission_date};

use crate::option::{chain_option, from_falsy, get_or_else, map_option, sequence2};
use crate::pipe;

/// Placeholder shown when a display value is absent.
const MISSING_VALUE: &str = "-";

/// File metadata with independently-optional software fields.
///
/// Mirrors legacy records where each field may be missing outright or
/// present but empty; [`software_display_value`] treats both the same.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileMetadata {
    /// Name of the application that produced the file.
    pub application: Option<String>,
    /// Version of that application.
    pub app_version: Option<String>,
}

/// Formats `"{application} {app_version}"`, or `"-"` if either is missing.
///
/// Both fields must be present and non-empty; a missing field and an empty
/// one fall back identically. The join is all-or-nothing, so the output is
/// never a dangling name without a version or vice versa.
///
/// # Examples
///
/// ```rust
/// use optfmt::display::{FileMetadata, software_display_value};
///
/// let metadata = FileMetadata {
///     application: Some("MS Word".to_string()),
///     app_version: Some("3.0.0".to_string()),
/// };
/// assert_eq!(software_display_value(&metadata), "MS Word 3.0.0");
///
/// let empty_version = FileMetadata {
///     application: Some("MS Word".to_string()),
///     app_version: Some(String::new()),
/// };
/// assert_eq!(software_display_value(&empty_version), "-");
/// ```
pub fn software_display_value(metadata: &FileMetadata) -> String {
    pipe!(
        sequence2(
            metadata.application.clone().and_then(from_falsy),
            metadata.app_version.clone().and_then(from_falsy),
        ),
        map_option(|(application, version)| format!("{application} {version}")),
        get_or_else(|| MISSING_VALUE.to_string()),
    )
}

/// Formats a raw submission-date string, or `"-"` when there is nothing to show.
///
/// An empty string is treated as absent. A non-empty string is parsed with
/// [`parse_submission_date`] and rendered with [`format_date`]; strings that
/// do not parse as dates also fall back to `"-"` rather than formatting a
/// nonsense value.
///
/// # Examples
///
/// ```rust
/// use optfmt::display::submission_date_display_value;
///
/// assert_eq!(submission_date_display_value(""), "-");
/// assert_eq!(
///     submission_date_display_value("2020-01-01"),
///     "January 1, 2020, 12:00 AM UTC"
/// );
/// assert_eq!(submission_date_display_value("not a date"), "-");
/// ```
pub fn submission_date_display_value(raw: &str) -> String {
    pipe!(
        from_falsy(raw),
        chain_option(parse_submission_date),
        map_option(|date| format_date(&date)),
        get_or_else(|| MISSING_VALUE.to_string()),
    )
}
