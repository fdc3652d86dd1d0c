//! Timestamp parsing for backend wire formats.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Parse a backend timestamp string.
///
/// The backend emits naive ISO-8601 (`datetime.isoformat()`, no offset), but
/// accept RFC 3339 too. Unparseable values fall back to now — a wrong display
/// time beats dropping the whole record.
pub fn parse_backend_timestamp(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Utc.from_utc_datetime(&naive);
    }
    tracing::warn!(timestamp = raw, "Unparseable backend timestamp");
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_naive_isoformat() {
        let dt = parse_backend_timestamp("2025-08-20T14:30:00.123456");
        assert_eq!(dt.to_rfc3339(), "2025-08-20T14:30:00.123456+00:00");
    }

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let dt = parse_backend_timestamp("2025-08-20T14:30:00+02:00");
        assert_eq!(dt.to_rfc3339(), "2025-08-20T12:30:00+00:00");
    }

    #[test]
    fn test_garbage_falls_back_to_now() {
        let before = Utc::now();
        let dt = parse_backend_timestamp("not a time");
        assert!(dt >= before);
    }
}
