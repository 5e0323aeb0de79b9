//! The day-cycle state machine.
//!
//! A planner session is always in exactly one of three states: editing today,
//! previewing tomorrow, or asleep between days. The state machine owns no
//! block data; it only decides which sequence is active and which mutations
//! are currently permitted. Transition methods return `false` for triggers
//! that do not apply in the current state, mirroring the planner-wide policy
//! of silent idempotent rejection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which day sequence is active for viewing and editing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    /// The mutable, completion-tracked "today" sequence
    #[default]
    Today,

    /// The "tomorrow" preview/edit buffer
    Tomorrow,
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(ActiveView::Today),
            "tomorrow" => Ok(ActiveView::Tomorrow),
            _ => Err(format!("Invalid view: {s}")),
        }
    }
}

impl ActiveView {
    /// Convert to the stable name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Today => "today",
            ActiveView::Tomorrow => "tomorrow",
        }
    }
}

/// State of the whole planner session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCycle {
    /// Awake, with the "today" sequence active
    TodayActive,

    /// Awake, previewing and editing the "tomorrow" sequence
    TomorrowPreview,

    /// Between days; no sequence is active
    Asleep,
}

impl DayCycle {
    /// Reassemble the state from its persisted parts.
    ///
    /// Sleep wins over any persisted view: waking always resumes on today.
    pub fn from_parts(asleep: bool, view: ActiveView) -> Self {
        if asleep {
            DayCycle::Asleep
        } else {
            match view {
                ActiveView::Today => DayCycle::TodayActive,
                ActiveView::Tomorrow => DayCycle::TomorrowPreview,
            }
        }
    }

    /// Whether the planner is asleep.
    pub fn is_asleep(&self) -> bool {
        matches!(self, DayCycle::Asleep)
    }

    /// The sequence currently active for viewing and editing, if any.
    pub fn active_view(&self) -> Option<ActiveView> {
        match self {
            DayCycle::TodayActive => Some(ActiveView::Today),
            DayCycle::TomorrowPreview => Some(ActiveView::Tomorrow),
            DayCycle::Asleep => None,
        }
    }

    /// Whether completion toggling and emergency insertion are permitted.
    ///
    /// Both always target the "today" sequence and are allowed in either
    /// awake state, including while the tomorrow preview is on screen.
    pub fn allows_today_edits(&self) -> bool {
        !self.is_asleep()
    }

    /// Whether replacing the tomorrow sequence from a template is permitted.
    pub fn allows_template_load(&self) -> bool {
        matches!(self, DayCycle::TomorrowPreview)
    }

    /// `switch-view` trigger: make `view` the active sequence.
    ///
    /// Returns `false` while asleep or when `view` is already active.
    pub fn switch_view(&mut self, view: ActiveView) -> bool {
        let next = match view {
            ActiveView::Today => DayCycle::TodayActive,
            ActiveView::Tomorrow => DayCycle::TomorrowPreview,
        };
        if self.is_asleep() || *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// `end-day` trigger: go to sleep from either awake state.
    ///
    /// The view resets so the next wake starts on today. Returns `false`
    /// when already asleep.
    pub fn end_day(&mut self) -> bool {
        if self.is_asleep() {
            return false;
        }
        *self = DayCycle::Asleep;
        true
    }

    /// `start-new-day` trigger: wake up into the today view.
    ///
    /// Returns `false` unless currently asleep. The accompanying data
    /// rollover is the block store's job.
    pub fn start_new_day(&mut self) -> bool {
        if !self.is_asleep() {
            return false;
        }
        *self = DayCycle::TodayActive;
        true
    }
}

impl Default for DayCycle {
    fn default() -> Self {
        DayCycle::TodayActive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_view_toggles_between_awake_states() {
        let mut cycle = DayCycle::TodayActive;
        assert!(cycle.switch_view(ActiveView::Tomorrow));
        assert_eq!(cycle, DayCycle::TomorrowPreview);
        assert!(cycle.switch_view(ActiveView::Today));
        assert_eq!(cycle, DayCycle::TodayActive);
    }

    #[test]
    fn test_switch_to_current_view_is_noop() {
        let mut cycle = DayCycle::TodayActive;
        assert!(!cycle.switch_view(ActiveView::Today));
        assert_eq!(cycle, DayCycle::TodayActive);
    }

    #[test]
    fn test_switch_view_rejected_while_asleep() {
        let mut cycle = DayCycle::Asleep;
        assert!(!cycle.switch_view(ActiveView::Tomorrow));
        assert_eq!(cycle, DayCycle::Asleep);
    }

    #[test]
    fn test_end_day_from_either_awake_state() {
        let mut cycle = DayCycle::TodayActive;
        assert!(cycle.end_day());
        assert_eq!(cycle, DayCycle::Asleep);

        let mut cycle = DayCycle::TomorrowPreview;
        assert!(cycle.end_day());
        assert_eq!(cycle, DayCycle::Asleep);

        assert!(!cycle.end_day());
    }

    #[test]
    fn test_start_new_day_only_from_asleep() {
        let mut cycle = DayCycle::Asleep;
        assert!(cycle.start_new_day());
        assert_eq!(cycle, DayCycle::TodayActive);

        assert!(!cycle.start_new_day());
        let mut cycle = DayCycle::TomorrowPreview;
        assert!(!cycle.start_new_day());
        assert_eq!(cycle, DayCycle::TomorrowPreview);
    }

    #[test]
    fn test_permissions_per_state() {
        assert!(DayCycle::TodayActive.allows_today_edits());
        assert!(DayCycle::TomorrowPreview.allows_today_edits());
        assert!(!DayCycle::Asleep.allows_today_edits());

        assert!(DayCycle::TomorrowPreview.allows_template_load());
        assert!(!DayCycle::TodayActive.allows_template_load());
        assert!(!DayCycle::Asleep.allows_template_load());

        assert_eq!(DayCycle::Asleep.active_view(), None);
        assert_eq!(
            DayCycle::TomorrowPreview.active_view(),
            Some(ActiveView::Tomorrow)
        );
    }

    #[test]
    fn test_from_parts_prefers_sleep_over_view() {
        assert_eq!(
            DayCycle::from_parts(true, ActiveView::Tomorrow),
            DayCycle::Asleep
        );
        assert_eq!(
            DayCycle::from_parts(false, ActiveView::Tomorrow),
            DayCycle::TomorrowPreview
        );
        assert_eq!(
            DayCycle::from_parts(false, ActiveView::Today),
            DayCycle::TodayActive
        );
    }

    #[test]
    fn test_active_view_parse_round_trip() {
        assert_eq!("today".parse::<ActiveView>(), Ok(ActiveView::Today));
        assert_eq!("Tomorrow".parse::<ActiveView>(), Ok(ActiveView::Tomorrow));
        assert!("yesterday".parse::<ActiveView>().is_err());
    }
}
