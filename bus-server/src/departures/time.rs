//! Departure timestamp handling.
//!
//! The upstream API reports departure times as ISO 8601 strings, usually
//! carrying a `+02:00` offset but occasionally the malformed `+0200`
//! form without a colon. This module normalizes those strings, parses
//! them, and converts the result into the Europe/Zurich zone that all
//! window checks and displayed times use.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::Zurich;
use chrono_tz::Tz;

/// Error returned when a departure timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time {raw:?}: {reason}")]
pub struct TimeParseError {
    raw: String,
    reason: String,
}

impl TimeParseError {
    fn new(raw: &str, reason: impl Into<String>) -> Self {
        Self {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}

/// Current time in the Europe/Zurich zone.
pub fn zurich_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Zurich)
}

/// Fix the known malformed offset forms `+0200`/`-0200`.
///
/// Offsets that already carry a colon, and `Z`, pass through untouched.
fn normalize_offset(raw: &str) -> String {
    if raw.contains("+0200") {
        raw.replace("+0200", "+02:00")
    } else if raw.contains("-0200") {
        raw.replace("-0200", "-02:00")
    } else {
        raw.to_string()
    }
}

/// Parse an upstream departure timestamp into a Europe/Zurich instant.
///
/// Accepts RFC 3339 values; `Z` is treated as UTC. The malformed
/// `+0200`/`-0200` offsets are normalized first. Anything else is an
/// error for the caller to record.
pub fn parse_departure_time(raw: &str) -> Result<DateTime<Tz>, TimeParseError> {
    let normalized = normalize_offset(raw);

    let parsed = DateTime::parse_from_rfc3339(&normalized)
        .map_err(|e| TimeParseError::new(raw, e.to_string()))?;

    Ok(parsed.with_timezone(&Zurich))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_well_formed_offset() {
        let parsed = parse_departure_time("2025-06-25T14:30:00+02:00").unwrap();

        let expected = Zurich.with_ymd_and_hms(2025, 6, 25, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn normalizes_malformed_positive_offset() {
        let malformed = parse_departure_time("2025-06-25T14:30:00+0200").unwrap();
        let wellformed = parse_departure_time("2025-06-25T14:30:00+02:00").unwrap();

        assert_eq!(malformed, wellformed);
    }

    #[test]
    fn normalizes_malformed_negative_offset() {
        let parsed = parse_departure_time("2025-06-25T10:30:00-0200").unwrap();

        // 10:30 at -02:00 is 12:30 UTC, 14:30 in Zurich during CEST.
        let expected = Zurich.with_ymd_and_hms(2025, 6, 25, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn zulu_is_utc() {
        let parsed = parse_departure_time("2025-06-25T12:30:00Z").unwrap();

        let expected = Zurich.with_ymd_and_hms(2025, 6, 25, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn winter_time_converts_with_one_hour_offset() {
        let parsed = parse_departure_time("2025-01-15T08:00:00Z").unwrap();

        let expected = Zurich.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn colon_offsets_pass_through_normalization() {
        // A +02:00 string contains neither "+0200" nor "-0200".
        let parsed = parse_departure_time("2025-06-25T14:30:00+01:00").unwrap();

        let expected = Zurich.with_ymd_and_hms(2025, 6, 25, 15, 30, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_departure_time("not-a-time").is_err());
        assert!(parse_departure_time("").is_err());
        assert!(parse_departure_time("2025-06-25").is_err());
    }

    #[test]
    fn rejects_missing_offset() {
        assert!(parse_departure_time("2025-06-25T14:30:00").is_err());
    }

    #[test]
    fn error_reports_raw_input() {
        let err = parse_departure_time("not-a-time").unwrap_err();
        assert!(err.to_string().contains("not-a-time"));
    }

    #[test]
    fn zurich_now_is_in_zurich() {
        let now = zurich_now();
        assert_eq!(now.timezone(), Zurich);
    }
}
