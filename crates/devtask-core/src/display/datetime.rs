//! Date and time display wrappers.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around [`Timestamp`] that formats in the system timezone.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM:SS TZ`,
/// with zero-padded components, 24-hour time, and the timezone
/// abbreviation (e.g. UTC, EST, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
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

/// A wrapper around an optional due date for uniform formatting.
///
/// Dates render in ISO `YYYY-MM-DD` form; an absent due date renders
/// as `none`.
pub struct DueDate(pub Option<Date>);

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{date}"),
            None => write!(f, "none"),
        }
    }
}
