//! Block operations for the Planner.
//!
//! Each operation gates itself on the day-cycle state, applies the mutation
//! to the block store, and persists a snapshot when something changed.
//! Commands that do not apply in the current state, or that address unknown
//! blocks or invalid positions, are rejected as silent no-ops: the return
//! value is `Ok(false)` and the state is untouched.

use super::Planner;
use crate::error::Result;
use crate::params::{BlockId, InsertEmergency, MoveBlock};

impl Planner {
    /// Toggle the completion flag of a today block.
    ///
    /// Always targets the today sequence, whichever view is on screen;
    /// rejected while asleep.
    pub fn toggle_complete(&mut self, params: &BlockId) -> Result<bool> {
        let id = params.id;
        self.apply(|planner| {
            planner.cycle.allows_today_edits() && planner.store.toggle_complete(id)
        })
    }

    /// Move a block one position up or down in the active sequence.
    pub fn move_block(&mut self, params: &MoveBlock) -> Result<bool> {
        let MoveBlock { index, direction } = *params;
        self.apply(|planner| match planner.cycle.active_view() {
            Some(view) => planner.store.move_block(view, index, direction),
            None => false,
        })
    }

    /// Delete a block by identifier from the active sequence.
    pub fn delete_block(&mut self, params: &BlockId) -> Result<bool> {
        let id = params.id;
        self.apply(|planner| match planner.cycle.active_view() {
            Some(view) => planner.store.delete_block(view, id),
            None => false,
        })
    }

    /// Splice an unplanned emergency block into today's remaining schedule.
    ///
    /// Always targets the today sequence; rejected while asleep, as is a
    /// zero duration. Re-running the calculator afterwards pushes every
    /// following block later by the emergency's duration.
    pub fn insert_emergency(&mut self, params: &InsertEmergency) -> Result<bool> {
        let minutes = params.minutes;
        self.apply(|planner| {
            planner.cycle.allows_today_edits()
                && planner.store.insert_emergency(minutes).is_some()
        })
    }
}
