//! Built-in day templates.
//!
//! Templates are immutable blueprints used to seed a fresh day sequence. They
//! are never handed out directly: instantiation copies the blueprint and
//! assigns fresh identifiers, so edits to a live sequence can never reach
//! back into a template.

use std::str::FromStr;

use jiff::civil::{time, Time};
use serde::{Deserialize, Serialize};

use super::{Block, BlockCategory, DaySequence, IdAllocator};

/// The two canonical day templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// High-intensity day built around a training block
    Gym,

    /// Lighter day built around a long skill deep-work block
    Skill,
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gym" => Ok(TemplateKind::Gym),
            "skill" => Ok(TemplateKind::Skill),
            _ => Err(format!("Invalid template: {s}")),
        }
    }
}

/// Clock time of the fixed daily meeting present in both templates.
const DAILY_MEETING: Time = time(12, 30, 0, 0);

/// One row of a template blueprint: title, duration, category, anchor.
type Blueprint = (&'static str, u32, BlockCategory, Option<Time>);

const GYM_DAY: &[Blueprint] = &[
    ("Rutina mañana y desayuno", 30, BlockCategory::Routine, None),
    ("Sprint profundo #1", 120, BlockCategory::DeepWork, None),
    ("Recarga (siesta)", 20, BlockCategory::Routine, None),
    ("Sprint profundo #2", 120, BlockCategory::DeepWork, None),
    (
        "Reunión diaria",
        45,
        BlockCategory::FixedAppointment,
        Some(DAILY_MEETING),
    ),
    ("Almuerzo", 30, BlockCategory::Routine, None),
    ("Lectura / administración", 60, BlockCategory::Routine, None),
    ("Gimnasio (full body)", 120, BlockCategory::Gym, None),
    ("Gestión ligera", 30, BlockCategory::LightWork, None),
    ("Ducha y salida", 15, BlockCategory::Routine, None),
    ("Social / cena", 180, BlockCategory::Social, None),
];

const SKILL_DAY: &[Blueprint] = &[
    ("Rutina mañana y desayuno", 30, BlockCategory::Routine, None),
    ("Sprint profundo #1", 120, BlockCategory::DeepWork, None),
    ("Recarga (siesta)", 20, BlockCategory::Routine, None),
    ("Sprint profundo #2", 120, BlockCategory::DeepWork, None),
    (
        "Reunión diaria",
        45,
        BlockCategory::FixedAppointment,
        Some(DAILY_MEETING),
    ),
    ("Almuerzo", 45, BlockCategory::Routine, None),
    ("Deep work de skills", 150, BlockCategory::LightWork, None),
    ("Ducha y salida", 30, BlockCategory::Routine, None),
    ("Social / cena", 180, BlockCategory::Social, None),
];

impl TemplateKind {
    /// Convert to the stable name used on the command line and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Gym => "gym",
            TemplateKind::Skill => "skill",
        }
    }

    /// The template selected as the default preview after declaring the
    /// upcoming day to be of this kind.
    ///
    /// Declaring a gym day suggests a skill day next, and vice versa.
    pub fn opposite(self) -> Self {
        match self {
            TemplateKind::Gym => TemplateKind::Skill,
            TemplateKind::Skill => TemplateKind::Gym,
        }
    }

    /// Instantiate the template into a fresh day sequence.
    ///
    /// Every block receives a newly allocated identifier and starts out not
    /// completed.
    pub fn instantiate(self, ids: &mut IdAllocator) -> DaySequence {
        let blueprint = match self {
            TemplateKind::Gym => GYM_DAY,
            TemplateKind::Skill => SKILL_DAY,
        };
        DaySequence(
            blueprint
                .iter()
                .map(|&(title, duration_minutes, category, fixed_time)| Block {
                    id: ids.next_id(),
                    title: title.to_string(),
                    duration_minutes,
                    category,
                    completed: false,
                    fixed_time,
                })
                .collect(),
        )
    }
}
