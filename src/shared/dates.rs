//! Date normalization helpers.
//!
//! Every date crossing the enrichment boundary uses the fixed textual form
//! `DD-MM-YYYY`, regardless of what the upstream provider returned.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// The canonical boundary date format.
const OUTPUT_FORMAT: &str = "%d-%m-%Y";

/// Normalize a provider date string to `DD-MM-YYYY`.
///
/// Accepts RFC 3339 timestamps (npm, GitHub), bare `YYYY-MM-DDTHH:MM:SS`
/// timestamps (PyPI upload times, with or without fractional seconds), and
/// plain `YYYY-MM-DD` dates (endoflife.date). Returns `None` for anything
/// unrecognized — an unparsable date is absent data, not an error.
pub fn to_dd_mm_yyyy(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.format(OUTPUT_FORMAT).to_string());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format(OUTPUT_FORMAT).to_string());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.format(OUTPUT_FORMAT).to_string());
    }

    None
}

/// Normalize an epoch-milliseconds timestamp (Maven Central search docs)
/// to `DD-MM-YYYY`.
pub fn millis_to_dd_mm_yyyy(millis: i64) -> Option<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis(millis)?;
    Some(dt.format(OUTPUT_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(
            to_dd_mm_yyyy("2012-03-05T17:25:37.462Z"),
            Some("05-03-2012".to_string())
        );
    }

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(
            to_dd_mm_yyyy("2023-07-14T09:00:01"),
            Some("14-07-2023".to_string())
        );
        assert_eq!(
            to_dd_mm_yyyy("2023-07-14T09:00:01.123456"),
            Some("14-07-2023".to_string())
        );
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(to_dd_mm_yyyy("2025-04-30"), Some("30-04-2025".to_string()));
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(to_dd_mm_yyyy("not a date"), None);
        assert_eq!(to_dd_mm_yyyy(""), None);
        assert_eq!(to_dd_mm_yyyy("  "), None);
    }

    #[test]
    fn test_millis() {
        // 2021-03-01T00:00:00Z
        assert_eq!(
            millis_to_dd_mm_yyyy(1_614_556_800_000),
            Some("01-03-2021".to_string())
        );
    }
}
