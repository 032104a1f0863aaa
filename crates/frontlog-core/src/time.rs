//! Time and duration utilities.

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

/// RFC 3339 timestamp with millisecond precision, e.g. `2024-05-01T09:07:03.042Z`.
pub fn iso_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time as an RFC 3339 timestamp.
pub fn now_iso() -> String {
    iso_timestamp(Utc::now())
}

/// Format an elapsed duration the way console timers report it: fractional
/// milliseconds, three decimals.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}ms", elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 9, 7, 3).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(iso_timestamp(ts), "2024-05-01T09:07:03.042Z");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_micros(12_345)), "12.345ms");
        assert_eq!(format_elapsed(Duration::ZERO), "0.000ms");
        assert_eq!(format_elapsed(Duration::from_secs(2)), "2000.000ms");
    }
}
