//! High-level planner API for the daily timeline.
//!
//! This module provides the main [`Planner`] interface: the single owner of
//! the block store, the day-cycle state, and the day-start anchor. It applies
//! user commands, gates them on the state machine, recomputes the timeline
//! through the schedule calculator, and persists a snapshot after every state
//! change.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Commands     │    │     Planner     │    │    Snapshot     │
//! │ (block_ops,     │───▶│ store + cycle + │───▶│  (JSON on disk) │
//! │  day_ops)       │    │ start anchor    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               │
//!                               ▼
//!                        schedule::compute
//! ```
//!
//! All operations are synchronous and run to completion; the planner is
//! designed for a single execution context and needs no locking. Mutating
//! operations return `Ok(false)` when a command is rejected as a no-op
//! (out-of-bounds move, unknown id, wrong state) and reserve errors for
//! snapshot I/O.
//!
//! # Usage
//!
//! ```rust
//! use dayflow_core::PlannerBuilder;
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let now = date(2024, 3, 4).at(7, 0, 0, 0);
//! let mut planner = PlannerBuilder::new()
//!     .with_snapshot_path(Some("planner.json"))
//!     .build(now)?;
//!
//! let view = planner.timeline().expect("a fresh planner is awake");
//! println!("{} blocks today", view.blocks.len());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::civil::DateTime;

use crate::cycle::{ActiveView, DayCycle};
use crate::error::Result;
use crate::models::ScheduledBlock;
use crate::schedule;
use crate::snapshot::{Snapshot, DEFAULT_DAY_START};
use crate::store::BlockStore;

pub mod block_ops;
pub mod builder;
pub mod day_ops;


pub use builder::PlannerBuilder;

/// The computed projection of the active sequence, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    /// Which sequence this view projects
    pub view: ActiveView,

    /// The scheduled blocks, in execution order
    pub blocks: Vec<ScheduledBlock>,

    /// End instant of the last block, if any
    pub end_of_day: Option<DateTime>,

    /// Whether the day ends too late at night or past midnight
    pub overrun: bool,
}

/// Main planner interface owning all mutable session state.
pub struct Planner {
    pub(crate) store: BlockStore,
    pub(crate) cycle: DayCycle,
    pub(crate) start: DateTime,
    pub(crate) snapshot_path: PathBuf,
}

impl Planner {
    /// Reassemble a planner from a loaded snapshot.
    pub(crate) fn from_snapshot(snapshot: Snapshot, snapshot_path: PathBuf) -> Self {
        use crate::models::IdAllocator;

        let Snapshot {
            today,
            tomorrow,
            asleep,
            view,
            start,
            next_id,
        } = snapshot;
        Self {
            store: BlockStore::new(today, tomorrow, IdAllocator::starting_at(next_id)),
            cycle: DayCycle::from_parts(asleep, view),
            start,
            snapshot_path,
        }
    }

    /// The current day-cycle state.
    pub fn cycle(&self) -> DayCycle {
        self.cycle
    }

    /// The day-start anchor instant for the today sequence.
    pub fn start(&self) -> DateTime {
        self.start
    }

    /// Compute the timeline of the active sequence.
    ///
    /// Returns `None` while asleep. The today view is projected from the
    /// stored day-start anchor; the tomorrow preview is projected from the
    /// default day start on the following calendar day. Scheduling never
    /// reads the wall clock.
    pub fn timeline(&self) -> Option<DayView> {
        let view = self.cycle.active_view()?;
        let base = match view {
            ActiveView::Today => self.start,
            ActiveView::Tomorrow => self.preview_start(),
        };
        let blocks = schedule::compute(self.store.sequence(view).blocks(), base);
        let end_of_day = schedule::end_of_day(&blocks);
        let overrun = end_of_day.is_some_and(schedule::is_overrun);
        Some(DayView {
            view,
            blocks,
            end_of_day,
            overrun,
        })
    }

    /// Baseline instant for the tomorrow preview: the default day start on
    /// the calendar day after the stored anchor.
    fn preview_start(&self) -> DateTime {
        self.start
            .saturating_add(jiff::SignedDuration::from_hours(24))
            .date()
            .to_datetime(DEFAULT_DAY_START)
    }

    /// Write the current state to the snapshot path.
    pub(crate) fn persist(&self) -> Result<()> {
        let snapshot = Snapshot {
            today: self.store.today().clone(),
            tomorrow: self.store.tomorrow().clone(),
            asleep: self.cycle.is_asleep(),
            view: self.cycle.active_view().unwrap_or_default(),
            start: self.start,
            next_id: self.store.next_id(),
        };
        snapshot.save(&self.snapshot_path)
    }

    /// Run a mutation and persist the snapshot when it applied.
    pub(crate) fn apply(&mut self, mutate: impl FnOnce(&mut Self) -> bool) -> Result<bool> {
        let changed = mutate(self);
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }
}
