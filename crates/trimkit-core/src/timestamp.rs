//! Timestamp labels shown above the trim handles.

use std::fmt;

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    /// Round `seconds` to the nearest whole second and decompose it.
    ///
    /// Negative, NaN and infinite inputs decompose to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let total = if seconds.is_finite() && seconds > 0.0 {
            seconds.round() as u64
        } else {
            0
        };
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours >= 1 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Format a duration in seconds as `H:MM:SS`, or `MM:SS` below one hour.
///
/// ```
/// use trimkit_core::format_timestamp;
/// assert_eq!(format_timestamp(61.0), "01:01");
/// assert_eq!(format_timestamp(3661.0), "1:01:01");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    Hms::from_seconds(seconds).to_string()
}
