use chrono::{SecondsFormat, Utc};

/// Current time as an ISO-8601 UTC string with millisecond precision
/// (`2026-01-02T03:04:05.678Z`), the format every record timestamp uses on
/// disk and on the wire.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch, used for generated upload filenames.
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_now_iso_format() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
        // 2026-01-02T03:04:05.678Z
        assert_eq!(ts.len(), 24);
    }

    #[test]
    fn test_timestamp_millis_monotonic_scale() {
        let ms = current_timestamp_millis();
        // Sanity: later than 2020-01-01 in milliseconds
        assert!(ms > 1_577_836_800_000);
    }
}
