//! Utilities for the fixed date display format
//!
//! All user-facing dates use one format, `d.M.yyyy` (no zero padding).
//! Parsing doubles as validation: input that does not match the format is
//! rejected, never silently reinterpreted.

use chrono::NaiveDate;

const DISPLAY_FORMAT: &str = "%-d.%-m.%Y";

/// Parse user input against the display format
///
/// Returns `None` for anything that is not a real calendar date in
/// `d.M.yyyy` form. Zero-padded day/month are accepted on input.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT).ok()
}

/// Format a date to the display format
/// Example: 2015-02-01 -> "1.2.2015"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unpadded_and_padded_input() {
        let expected = NaiveDate::from_ymd_opt(2015, 2, 1).unwrap();
        assert_eq!(parse_display_date("1.2.2015"), Some(expected));
        assert_eq!(parse_display_date("01.02.2015"), Some(expected));
        assert_eq!(parse_display_date("  1.2.2015 "), Some(expected));
    }

    #[test]
    fn rejects_wrong_format_and_impossible_dates() {
        assert_eq!(parse_display_date("2015-02-01"), None);
        assert_eq!(parse_display_date("31.2.2015"), None);
        assert_eq!(parse_display_date("1.13.2015"), None);
        assert_eq!(parse_display_date("soon"), None);
        assert_eq!(parse_display_date(""), None);
    }

    #[test]
    fn formats_without_padding() {
        let date = NaiveDate::from_ymd_opt(2015, 2, 1).unwrap();
        assert_eq!(format_display_date(date), "1.2.2015");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_display_date(date), "31.12.2024");
    }

    #[test]
    fn format_and_parse_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_display_date(&format_display_date(date)), Some(date));
    }
}
