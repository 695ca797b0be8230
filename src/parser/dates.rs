//! Date parsing for range filters.
//!
//! Dashboard feeds mix RFC 3339 stamps, bare dates and epoch milliseconds.
//! Anything without an explicit offset is read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string into a UTC instant
///
/// Returns `None` for anything unrecognised.
pub fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse a JSON date field: strings via [`parse_date_str`], numbers as epoch millis
pub fn parse_instant(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_date_str("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_parse_naive_forms_as_utc() {
        let a = parse_date_str("2024-03-01T10:00:00").unwrap();
        let b = parse_date_str("2024-03-01 10:00:00").unwrap();
        let c = parse_date_str("2024-03-01T10:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_date_str("2024-03-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date_str("").is_none());
        assert!(parse_date_str("yesterday").is_none());
        assert!(parse_date_str("2024-13-45").is_none());
        assert!(parse_instant(Some(&json!(null))).is_none());
        assert!(parse_instant(Some(&json!({"y": 2024}))).is_none());
        assert!(parse_instant(None).is_none());
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = parse_instant(Some(&json!(0))).unwrap();
        assert_eq!(dt.timestamp(), 0);

        let dt = parse_instant(Some(&json!(1_709_251_200_000_i64))).unwrap();
        assert_eq!(dt, parse_date_str("2024-03-01").unwrap());
    }
}
