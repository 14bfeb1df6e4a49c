//! Date/time conversion for close approach timestamps
//!
//! The source data writes approach times as `2025-Jan-01 00:00`.
//! Output (display and export) uses `2025-01-01 00:00`, minutes precision.

use chrono::{NaiveDate, NaiveDateTime};

/// Input format used by the close approach source data
pub const SOURCE_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output format used for display and export
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Calendar date format accepted on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a source-format approach time (`2025-Jan-01 00:00`).
///
/// Also accepts the output format so that exported data can be read back.
pub fn cd_to_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, SOURCE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, OUTPUT_FORMAT))
        .ok()
}

/// Format an approach time; no time renders as the empty string.
pub fn datetime_to_str(time: Option<&NaiveDateTime>) -> String {
    match time {
        Some(t) => t.format(OUTPUT_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format() {
        let t = cd_to_datetime("1900-Jan-01 00:11").unwrap();
        assert_eq!(datetime_to_str(Some(&t)), "1900-01-01 00:11");
    }

    #[test]
    fn test_output_format_accepted() {
        let t = cd_to_datetime("2025-01-01 00:00").unwrap();
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(cd_to_datetime("yesterday").is_none());
        assert!(cd_to_datetime("").is_none());
    }

    #[test]
    fn test_missing_time_is_empty() {
        assert_eq!(datetime_to_str(None), "");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2020-12-31"),
            NaiveDate::from_ymd_opt(2020, 12, 31)
        );
        assert!(parse_date("12/31/2020").is_none());
    }
}
