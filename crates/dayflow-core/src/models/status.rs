//! Category and schedule-status enumerations for blocks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of block categories.
///
/// The category is a semantic tag carried by every block. The core emits it
/// verbatim; any icon or color mapping belongs to the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    /// Focused, high-intensity work
    DeepWork,

    /// Light work: management, admin, low-intensity tasks
    LightWork,

    /// Training / gym
    Gym,

    /// Social time
    Social,

    /// Biological routine: meals, rest, hygiene
    Routine,

    /// Appointment pinned to a clock time
    FixedAppointment,

    /// Unplanned emergency spliced into the day
    Emergency,
}

impl FromStr for BlockCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deep-work" | "deepwork" => Ok(BlockCategory::DeepWork),
            "light-work" | "lightwork" => Ok(BlockCategory::LightWork),
            "gym" => Ok(BlockCategory::Gym),
            "social" => Ok(BlockCategory::Social),
            "routine" | "bio" => Ok(BlockCategory::Routine),
            "fixed-appointment" | "fixed" => Ok(BlockCategory::FixedAppointment),
            "emergency" | "unplanned-emergency" => Ok(BlockCategory::Emergency),
            _ => Err(format!("Invalid block category: {s}")),
        }
    }
}

impl BlockCategory {
    /// Convert to the stable tag string used in snapshots and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockCategory::DeepWork => "deep-work",
            BlockCategory::LightWork => "light-work",
            BlockCategory::Gym => "gym",
            BlockCategory::Social => "social",
            BlockCategory::Routine => "routine",
            BlockCategory::FixedAppointment => "fixed-appointment",
            BlockCategory::Emergency => "emergency",
        }
    }
}

/// Type-safe enumeration of schedule statuses.
///
/// Assigned by the schedule calculator when a block is projected onto the
/// timeline. Only blocks with a fixed-time anchor can become `Late` or
/// `Waiting`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Block starts exactly where the running cursor put it
    #[default]
    Normal,

    /// Block starts after its fixed-time anchor
    Late,

    /// Block had to wait for its fixed-time anchor
    Waiting,
}

impl ScheduleStatus {
    /// Convert to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Normal => "normal",
            ScheduleStatus::Late => "late",
            ScheduleStatus::Waiting => "waiting",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dayflow_core::models::ScheduleStatus;
    ///
    /// assert_eq!(ScheduleStatus::Late.with_icon(), "⚠ Late");
    /// assert_eq!(ScheduleStatus::Waiting.with_icon(), "⏳ Waiting");
    /// assert_eq!(ScheduleStatus::Normal.with_icon(), "● On time");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ScheduleStatus::Normal => "● On time",
            ScheduleStatus::Late => "⚠ Late",
            ScheduleStatus::Waiting => "⏳ Waiting",
        }
    }
}
