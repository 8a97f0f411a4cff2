//! Lenient date parsing and formatting
//!
//! Inputs come from form fields and loosely-typed API records, so parsing
//! tries a fixed list of common shapes and never errors. Values without an
//! offset are interpreted as UTC; date-only values resolve to UTC midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;

/// Leading `YYYY-MM-DD` prefix, ASCII digits only
static DATE_PREFIX_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("DATE_PREFIX_REGEX pattern is valid")
});

const NAIVE_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

const NAIVE_DATE_FORMATS: &[&str] =
    &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

/// Parse a date or timestamp in any of the supported shapes
///
/// Supported, in order: RFC 3339, RFC 2822, naive date-times
/// (`YYYY-MM-DDTHH:MM[:SS[.f]]`, space-separated variants) and plain dates
/// (`YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, `March 9, 2024`, `9 March 2024`).
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_loose_datetime(input: &str) -> Option<DateTime<Utc>> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }

    None
}

/// Coerce a value to the `YYYY-MM-DD` shape used by date inputs
///
/// A value that already starts with `YYYY-MM-DD` keeps its first ten
/// characters verbatim (no calendar check). Anything else is parsed with
/// [`parse_loose_datetime`] and formatted; unparseable input yields an empty
/// string.
pub fn to_date_only(input: &str) -> String {
    let value = input.trim();
    if DATE_PREFIX_REGEX.is_match(value) {
        if let Some(prefix) = value.get(..10) {
            return prefix.to_string();
        }
    }

    parse_loose_datetime(value).map(|parsed| parsed.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Convert a value to an ISO-8601 UTC timestamp with millisecond precision
///
/// `2024-03-09` becomes `2024-03-09T00:00:00.000Z`. Returns `None` when the
/// value cannot be parsed.
pub fn to_iso_timestamp(input: &str) -> Option<String> {
    parse_loose_datetime(input).map(|parsed| parsed.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_keeps_prefix_verbatim() {
        assert_eq!(to_date_only("2021-06-01"), "2021-06-01");
        assert_eq!(to_date_only("2021-06-01T23:59:59.000Z"), "2021-06-01");
        // Prefix rule does not validate the calendar.
        assert_eq!(to_date_only("2021-13-45"), "2021-13-45");
    }

    /// Non-prefixed values are parsed and reformatted.
    #[test]
    fn test_date_only_parses_other_shapes() {
        assert_eq!(to_date_only("2021/06/01"), "2021-06-01");
        assert_eq!(to_date_only("06/01/2021"), "2021-06-01");
        assert_eq!(to_date_only("June 1, 2021"), "2021-06-01");
        assert_eq!(to_date_only("Tue, 1 Jun 2021 10:00:00 +0000"), "2021-06-01");
    }

    #[test]
    fn test_date_only_unparseable_is_empty() {
        assert_eq!(to_date_only(""), "");
        assert_eq!(to_date_only("   "), "");
        assert_eq!(to_date_only("last spring"), "");
    }

    /// Dates written in non-ASCII digits are not treated as `YYYY-MM-DD`.
    ///
    /// Assertions:
    /// - Arabic-Indic and full-width digits yield an empty string.
    /// - Neither shape parses as a timestamp.
    #[test]
    fn test_date_only_non_ascii_digits_is_empty() {
        assert_eq!(to_date_only("٢٠٢١-٠٦-٠١"), "");
        assert_eq!(to_date_only("２０２１-０６-０１"), "");
        assert_eq!(to_iso_timestamp("٢٠٢١-٠٦-٠١"), None);
    }

    #[test]
    fn test_iso_timestamp_shapes() {
        assert_eq!(to_iso_timestamp("2022-02-03").as_deref(), Some("2022-02-03T00:00:00.000Z"));
        assert_eq!(
            to_iso_timestamp("2022-02-03T10:15:00+02:00").as_deref(),
            Some("2022-02-03T08:15:00.000Z")
        );
        assert_eq!(
            to_iso_timestamp("2022-02-03 10:15:30").as_deref(),
            Some("2022-02-03T10:15:30.000Z")
        );
        assert_eq!(to_iso_timestamp("not a date"), None);
        assert_eq!(to_iso_timestamp("2022-02-30"), None);
    }

    /// Formatting an ISO timestamp back to a date is stable.
    #[test]
    fn test_iso_then_date_only_is_stable() {
        let iso = to_iso_timestamp("2019-11-30").unwrap_or_default();
        assert_eq!(to_date_only(&iso), "2019-11-30");
    }
}
