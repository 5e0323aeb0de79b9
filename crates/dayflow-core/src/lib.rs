//! Core library for the Dayflow daily-timeline planner.
//!
//! Dayflow projects a user-ordered sequence of activity blocks onto the
//! wall-clock timeline from a day-start anchor. This crate provides the
//! scheduling engine and all session state: the block store, the pure
//! schedule calculator, the emergency-insertion policy, the day-cycle state
//! machine, and snapshot persistence.
//!
//! # Architecture
//!
//! - [`models`]: blocks, sequences, templates and derived scheduled blocks
//! - [`schedule`]: the pure calculator, `(blocks, start) -> timeline`,
//!   recomputed from scratch after every mutation
//! - [`store`]: the two day sequences plus identifier allocation
//! - [`cycle`]: the Today / Tomorrow-preview / Asleep state machine
//! - [`planner`]: the facade that gates commands, recalculates and persists
//! - [`snapshot`]: the JSON snapshot document with fall-back-to-default
//!   loading
//! - [`display`]: markdown formatting for terminal presentation
//!
//! Everything is synchronous and single-threaded; the calculator is a pure
//! function with no shared state, safely callable any number of times.
//!
//! # Quick Start
//!
//! ```rust
//! use dayflow_core::{params::InsertEmergency, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let now = date(2024, 3, 4).at(7, 0, 0, 0);
//! let mut planner = PlannerBuilder::new()
//!     .with_snapshot_path(Some("planner.json"))
//!     .build(now)?;
//!
//! // Something came up: splice 30 minutes into the remaining day.
//! planner.insert_emergency(&InsertEmergency { minutes: 30 })?;
//!
//! // The timeline always reflects the latest edits.
//! let view = planner.timeline().expect("planner is awake");
//! for block in &view.blocks {
//!     println!("{block}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cycle;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use cycle::{ActiveView, DayCycle};
pub use display::{OperationStatus, Timeline};
pub use error::{PlannerError, Result};
pub use models::{
    Block, BlockCategory, DaySequence, MoveDirection, ScheduleStatus, ScheduledBlock, TemplateKind,
};
pub use planner::{DayView, Planner, PlannerBuilder};
pub use snapshot::{Snapshot, DEFAULT_DAY_START};
pub use store::BlockStore;
