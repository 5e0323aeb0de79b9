//! Scheduled block: a block projected onto the wall-clock timeline.

use jiff::civil::DateTime;

use super::{Block, ScheduleStatus};

/// A [`Block`] enriched with computed timing and conflict information.
///
/// This is a derived, ephemeral projection: it is produced by
/// [`crate::schedule::compute`] from a block sequence plus a start instant,
/// and is recomputed from scratch after every structural edit. It is never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledBlock {
    /// The underlying block
    pub block: Block,

    /// Computed start instant
    pub start: DateTime,

    /// Computed end instant
    pub end: DateTime,

    /// Conflict status against the block's fixed-time anchor, if any
    pub status: ScheduleStatus,

    /// Human-readable conflict message, present for late blocks and for
    /// waiting blocks whose idle gap exceeds the notice threshold
    pub conflict: Option<String>,
}
