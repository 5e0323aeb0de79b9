//! Clock-time display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// A wrapper around a civil [`DateTime`] that formats only the clock time.
///
/// Timeline output cares about wall-clock positions within a single day, so
/// the display format is simply `HH:MM` in 24-hour form.
pub struct ClockTime<'a>(pub &'a DateTime);

impl<'a> fmt::Display for ClockTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_clock_time_is_zero_padded() {
        let instant = date(2024, 3, 4).at(7, 5, 0, 0);
        assert_eq!(format!("{}", ClockTime(&instant)), "07:05");
    }
}
