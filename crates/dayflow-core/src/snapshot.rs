//! Snapshot persistence for the planner state.
//!
//! The whole planner state is one JSON document written after every state
//! change. Loading is deliberately forgiving: a missing file, unreadable
//! content or an unparseable document all degrade to the built-in default
//! state rather than surfacing an error, and unknown-but-recoverable shapes
//! are normalized on the way in.

use std::fs;
use std::path::Path;

use jiff::civil::{time, Date, DateTime, Time};
use serde::{Deserialize, Serialize};

use crate::cycle::ActiveView;
use crate::error::{PlannerError, Result};
use crate::models::{DaySequence, IdAllocator, TemplateKind};

/// Default day-start anchor clock time.
pub const DEFAULT_DAY_START: Time = time(7, 30, 0, 0);

/// The serialized planner state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// The "today" sequence
    pub today: DaySequence,

    /// The "tomorrow" preview sequence
    pub tomorrow: DaySequence,

    /// Whether the planner is asleep between days
    #[serde(default)]
    pub asleep: bool,

    /// Which sequence was active when the snapshot was taken
    #[serde(default)]
    pub view: ActiveView,

    /// The day-start anchor instant for the today sequence
    pub start: DateTime,

    /// Next block identifier to allocate
    #[serde(default)]
    pub next_id: u64,
}

impl Snapshot {
    /// The default state: gym day today, skill day in the preview, day start
    /// at 07:30 on the given calendar day.
    pub fn default_for(day: Date) -> Self {
        let mut ids = IdAllocator::default();
        let today = TemplateKind::Gym.instantiate(&mut ids);
        let tomorrow = TemplateKind::Skill.instantiate(&mut ids);
        Self {
            today,
            tomorrow,
            asleep: false,
            view: ActiveView::Today,
            start: day.to_datetime(DEFAULT_DAY_START),
            next_id: ids.peek(),
        }
    }

    /// Load a snapshot from `path`, falling back to the default state.
    ///
    /// Absence and parse failure are local recoveries, never errors.
    pub fn load_or_default(path: &Path, day: Date) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default_for(day);
        };
        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => snapshot.normalized(),
            Err(_) => Self::default_for(day),
        }
    }

    /// Write the snapshot document to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PlannerError::file_system(parent.to_path_buf(), e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| PlannerError::file_system(path.to_path_buf(), e))
    }

    /// Repair recoverable shape problems in a loaded document.
    ///
    /// Blocks violating the positive-duration invariant are dropped, and a
    /// missing identifier watermark is rebuilt from the highest id present.
    fn normalized(mut self) -> Self {
        self.today.0.retain(|b| b.duration_minutes > 0);
        self.tomorrow.0.retain(|b| b.duration_minutes > 0);

        let top = self
            .today
            .iter()
            .chain(self.tomorrow.iter())
            .map(|b| b.id)
            .max()
            .unwrap_or(0);
        if self.next_id <= top {
            self.next_id = top + 1;
        }
        self
    }
}
