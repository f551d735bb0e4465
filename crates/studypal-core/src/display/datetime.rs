//! Timestamp formatting for listings.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows a `Timestamp` in the system timezone, to the minute:
/// `2025-06-01 14:05 BST`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    /// Formats the timestamp in `tz` instead of the system timezone.
    pub fn in_zone(&self, tz: &TimeZone) -> String {
        self.0.to_zoned(tz.clone()).strftime("%Y-%m-%d %H:%M %Z").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.in_zone(&TimeZone::system()))
    }
}
