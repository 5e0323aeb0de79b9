//! The block store: both day sequences plus identifier allocation.
//!
//! The store is pure data with invariant enforcement; it knows nothing about
//! the day cycle or about which mutations are currently permitted. Callers
//! (the [`crate::planner::Planner`] facade) gate operations on the state
//! machine and pass in which sequence is active.

use crate::cycle::ActiveView;
use crate::models::{Block, BlockCategory, DaySequence, IdAllocator, MoveDirection, TemplateKind};

/// Title given to synthesized emergency blocks.
const EMERGENCY_TITLE: &str = "Imprevisto / Urgencia";

/// Holds the "today" and "tomorrow" sequences and allocates block ids.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStore {
    today: DaySequence,
    tomorrow: DaySequence,
    ids: IdAllocator,
}

impl BlockStore {
    /// Assemble a store from existing sequences, e.g. a loaded snapshot.
    pub fn new(today: DaySequence, tomorrow: DaySequence, ids: IdAllocator) -> Self {
        Self {
            today,
            tomorrow,
            ids,
        }
    }

    /// The default store: a gym day today, a skill day in the preview.
    pub fn with_defaults() -> Self {
        let mut ids = IdAllocator::default();
        let today = TemplateKind::Gym.instantiate(&mut ids);
        let tomorrow = TemplateKind::Skill.instantiate(&mut ids);
        Self {
            today,
            tomorrow,
            ids,
        }
    }

    /// The "today" sequence.
    pub fn today(&self) -> &DaySequence {
        &self.today
    }

    /// The "tomorrow" sequence.
    pub fn tomorrow(&self) -> &DaySequence {
        &self.tomorrow
    }

    /// The sequence backing the given view.
    pub fn sequence(&self, view: ActiveView) -> &DaySequence {
        match view {
            ActiveView::Today => &self.today,
            ActiveView::Tomorrow => &self.tomorrow,
        }
    }

    fn sequence_mut(&mut self, view: ActiveView) -> &mut DaySequence {
        match view {
            ActiveView::Today => &mut self.today,
            ActiveView::Tomorrow => &mut self.tomorrow,
        }
    }

    /// The identifier the next synthesized block would receive.
    pub fn next_id(&self) -> u64 {
        self.ids.peek()
    }

    /// Swap the block at `index` with its neighbor in the given view.
    pub fn move_block(&mut self, view: ActiveView, index: usize, direction: MoveDirection) -> bool {
        self.sequence_mut(view).move_block(index, direction)
    }

    /// Delete a block by identifier from the given view.
    pub fn delete_block(&mut self, view: ActiveView, id: u64) -> bool {
        self.sequence_mut(view).delete(id)
    }

    /// Toggle the completion flag of a today block.
    pub fn toggle_complete(&mut self, id: u64) -> bool {
        self.today.toggle_complete(id)
    }

    /// Splice an unplanned emergency block into today's remaining schedule.
    ///
    /// The block lands immediately before the first not-yet-completed block,
    /// so it never displaces completed history and always sits at the current
    /// point of execution; when everything is complete it is appended.
    /// Returns the new block's identifier, or `None` when the duration is
    /// zero.
    pub fn insert_emergency(&mut self, duration_minutes: u32) -> Option<u64> {
        if duration_minutes == 0 {
            return None;
        }
        let index = self
            .today
            .first_incomplete_index()
            .unwrap_or(self.today.len());
        let id = self.ids.next_id();
        self.today.insert_at(
            index,
            Block {
                id,
                title: EMERGENCY_TITLE.to_string(),
                duration_minutes,
                category: BlockCategory::Emergency,
                completed: false,
                fixed_time: None,
            },
        );
        Some(id)
    }

    /// Replace the tomorrow sequence with a fresh copy of a template.
    pub fn load_template(&mut self, template: TemplateKind) {
        self.tomorrow = template.instantiate(&mut self.ids);
    }

    /// Day rollover: tomorrow becomes the new today.
    ///
    /// The old today sequence is discarded. Every promoted block receives a
    /// fresh identifier with its completion flag cleared, and the new
    /// tomorrow preview is seeded from the template opposite to `choice`.
    pub fn roll_over(&mut self, choice: TemplateKind) {
        let promoted = self
            .tomorrow
            .iter()
            .map(|block| {
                let id = self.ids.next_id();
                block.reissued(id)
            })
            .collect();
        self.today = DaySequence(promoted);
        self.tomorrow = choice.opposite().instantiate(&mut self.ids);
    }
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
