//! DateTime display utilities.
//!
//! Tasks store their timestamps as milliseconds since the Unix epoch; this
//! module turns them into human-readable local times.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A `Timestamp` displayed in the system timezone.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, EST, JST)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDateTime(pub Timestamp);

impl LocalDateTime {
    /// Wraps a millisecond timestamp, if it is in jiff's supported range.
    pub fn from_millis(ms: i64) -> Option<Self> {
        Timestamp::from_millisecond(ms).ok().map(Self)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_range() {
        assert!(LocalDateTime::from_millis(1_700_000_000_000).is_some());
        assert!(LocalDateTime::from_millis(i64::MAX).is_none());
    }

    #[test]
    fn test_format_shape() {
        let formatted = LocalDateTime::from_millis(0).unwrap().to_string();
        // Date, time and zone separated by spaces
        assert_eq!(formatted.split(' ').count(), 3);
        assert_eq!(formatted.split(' ').nth(1).map(str::len), Some(8));
    }
}
