//! Timestamp sources for signed requests.
//!
//! The CLOB checks `POLY_TIMESTAMP` against its own clock, so the value must
//! be current unix time in seconds. There is no nonce; two requests signed in
//! the same second with the same method and path carry the same signature.

use time::OffsetDateTime;

/// Trait for providing the timestamp of a signed request.
pub trait TimestampProvider: Send + Sync {
    /// Unix time in seconds to sign the next request with.
    fn timestamp(&self) -> i64;
}

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn timestamp(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// Always returns the same timestamp.
///
/// Useful to reproduce a known signature or to sign against a clock offset
/// obtained from the server's `/time` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestamp(pub i64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_seconds() {
        let ts = SystemClock.timestamp();
        // After 2023-11-14 and before the year 2100, so seconds, not millis.
        assert!(ts > 1_700_000_000);
        assert!(ts < 4_102_444_800);
    }

    #[test]
    fn test_system_clock_non_decreasing() {
        let a = SystemClock.timestamp();
        let b = SystemClock.timestamp();
        assert!(b >= a);
    }

    #[test]
    fn test_fixed_timestamp() {
        let provider = FixedTimestamp(1700000000);
        assert_eq!(provider.timestamp(), 1700000000);
        assert_eq!(provider.timestamp(), 1700000000);
    }
}
