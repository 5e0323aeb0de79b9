//! Parameter structures for planner operations.
//!
//! Shared parameter structures usable across different interfaces (CLI,
//! future front ends) without framework-specific derives. Interface layers
//! define their own argument wrappers and convert into these types, keeping
//! clap concerns out of the core crate.

use serde::{Deserialize, Serialize};

use crate::cycle::ActiveView;
use crate::models::{MoveDirection, TemplateKind};

/// Generic parameters for operations addressing a block by identifier.
///
/// Used for toggle-complete and delete.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BlockId {
    /// The identifier of the block to operate on
    pub id: u64,
}

/// Parameters for moving a block one position within the active sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveBlock {
    /// 0-based index of the block to move
    pub index: usize,
    /// Whether to swap with the previous or the next block
    pub direction: MoveDirection,
}

/// Parameters for splicing an emergency block into today's schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InsertEmergency {
    /// Duration of the emergency in minutes
    pub minutes: u32,
}

impl Default for InsertEmergency {
    fn default() -> Self {
        Self { minutes: 30 }
    }
}

/// Parameters for switching the active view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwitchView {
    /// The sequence to make active
    pub view: ActiveView,
}

/// Parameters for replacing the tomorrow preview with a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadTemplate {
    /// Which built-in template to instantiate
    pub template: TemplateKind,
}

/// Parameters for waking up into a new day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartNewDay {
    /// The declared kind of the upcoming day; the new tomorrow preview is
    /// seeded from the opposite template
    pub template: TemplateKind,
}
