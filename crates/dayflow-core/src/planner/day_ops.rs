//! Day-cycle operations for the Planner.

use jiff::civil::DateTime;

use super::Planner;
use crate::error::Result;
use crate::params::{LoadTemplate, StartNewDay, SwitchView};
use crate::snapshot::DEFAULT_DAY_START;

impl Planner {
    /// Switch the active view between today and tomorrow.
    pub fn switch_view(&mut self, params: &SwitchView) -> Result<bool> {
        let view = params.view;
        self.apply(|planner| planner.cycle.switch_view(view))
    }

    /// Replace the tomorrow preview with a fresh copy of a template.
    ///
    /// Only permitted while previewing tomorrow.
    pub fn load_template(&mut self, params: &LoadTemplate) -> Result<bool> {
        let template = params.template;
        self.apply(|planner| {
            if !planner.cycle.allows_template_load() {
                return false;
            }
            planner.store.load_template(template);
            true
        })
    }

    /// End the day and go to sleep.
    ///
    /// Today's sequence is left in place but is discarded at the next
    /// rollover; nothing is merged anywhere.
    pub fn end_day(&mut self) -> Result<bool> {
        self.apply(|planner| planner.cycle.end_day())
    }

    /// Wake up into a new day.
    ///
    /// The tomorrow sequence becomes the new today (fresh identifiers,
    /// completion cleared), the new preview is seeded from the template
    /// opposite to the declared day kind, and the day-start anchor resets to
    /// the default clock time on `now`'s calendar day. Only permitted while
    /// asleep.
    pub fn start_new_day(&mut self, params: &StartNewDay, now: DateTime) -> Result<bool> {
        let template = params.template;
        self.apply(|planner| {
            if !planner.cycle.start_new_day() {
                return false;
            }
            planner.store.roll_over(template);
            planner.start = now.date().to_datetime(DEFAULT_DAY_START);
            true
        })
    }

    /// Re-anchor today's schedule to the current wall-clock minute.
    ///
    /// The "woke up late" command: the whole day is re-projected from now.
    /// Rejected while asleep.
    pub fn reset_start(&mut self, now: DateTime) -> Result<bool> {
        self.apply(|planner| {
            if planner.cycle.is_asleep() {
                return false;
            }
            let minute = jiff::civil::time(now.hour(), now.minute(), 0, 0);
            planner.start = now.date().to_datetime(minute);
            true
        })
    }
}
