//! Block model definition and identifier allocation.

use jiff::civil::Time;
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use super::BlockCategory;

/// An atomic unit of planned activity.
///
/// Blocks carry no computed timing; start and end instants are derived by the
/// schedule calculator each time the owning sequence changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    /// Identifier, unique within the owning sequence
    pub id: u64,

    /// Display text for the block
    pub title: String,

    /// Duration in minutes; always positive
    pub duration_minutes: u32,

    /// Semantic category tag
    pub category: BlockCategory,

    /// Completion flag; meaningful only for the "today" sequence
    #[serde(default)]
    pub completed: bool,

    /// Optional clock time this block must not start before
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_time: Option<Time>,
}

impl Block {
    /// The block's duration as a signed duration.
    pub fn duration(&self) -> SignedDuration {
        SignedDuration::from_mins(i64::from(self.duration_minutes))
    }

    /// Returns a copy with a fresh identifier and the completion flag cleared.
    ///
    /// Used by template instantiation and by day rollover, both of which must
    /// never reuse identifiers from the source sequence.
    pub fn reissued(&self, id: u64) -> Self {
        Self {
            id,
            completed: false,
            ..self.clone()
        }
    }
}

/// Monotonic identifier allocator for blocks.
///
/// One allocator is owned by the block store and shared by both sequences, so
/// identifiers stay unique across "today" and "tomorrow" even though the
/// uniqueness contract only requires it per sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator that hands out identifiers from `next` upwards.
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Returns the next identifier and advances the allocator.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The identifier the next call to [`IdAllocator::next_id`] would return.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
