//! Timeline wrapper for displaying a computed day view.

use std::fmt;

use super::datetime::ClockTime;
use crate::cycle::ActiveView;
use crate::planner::DayView;

/// Newtype wrapper for displaying a [`DayView`] as a markdown timeline.
///
/// Formats the view header, every scheduled block in execution order, the
/// estimated end of day, and the overrun alert when the schedule runs too
/// late. Handles empty sequences gracefully.
pub struct Timeline(pub DayView);

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.view {
            ActiveView::Today => writeln!(f, "# Today")?,
            ActiveView::Tomorrow => writeln!(f, "# Tomorrow (preview)")?,
        }
        writeln!(f)?;

        if self.0.blocks.is_empty() {
            writeln!(f, "No blocks planned.")?;
            return Ok(());
        }

        for block in &self.0.blocks {
            write!(f, "{block}")?;
        }

        if let Some(end) = &self.0.end_of_day {
            writeln!(f, "**Estimated end of day:** {}", ClockTime(end))?;
        }
        if self.0.overrun {
            writeln!(f)?;
            writeln!(
                f,
                "⚠ **Day overrun**: the schedule ends too late; consider dropping a low-priority block."
            )?;
        }

        Ok(())
    }
}
