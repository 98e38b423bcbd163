//! Lenient timestamp handling.
//!
//! The backend sends `createdAt` as an ISO-8601 string. A record with a
//! malformed timestamp must still render, so timestamps are kept raw on the
//! records and parsed on demand.

use chrono::{DateTime, SecondsFormat, Utc};

/// Parse an RFC 3339 timestamp into UTC.
///
/// Returns `None` for anything that does not parse.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision.
///
/// `2024-01-01T00:00:00Z` becomes `2024-01-01T00:00:00.000Z`.
#[must_use]
pub fn format_iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc() {
        let dt = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(format_iso_millis(&dt), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_offset_converts_to_utc() {
        let dt = parse_timestamp("2024-03-10T12:30:00.250+02:00").unwrap();
        assert_eq!(format_iso_millis(&dt), "2024-03-10T10:30:00.250Z");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
