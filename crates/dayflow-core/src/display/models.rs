//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, kept separate from
//! the model definitions. The category is always emitted as its plain tag;
//! mapping tags to icons or colors is the presentation layer's business.

use std::fmt;

use super::datetime::ClockTime;
use crate::models::{BlockCategory, ScheduleStatus, ScheduledBlock};

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduledBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.block.completed { "✓" } else { "○" };
        writeln!(f, "### {}. {} {marker}", self.block.id, self.block.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} – {} ({} min) · {}",
            ClockTime(&self.start),
            ClockTime(&self.end),
            self.block.duration_minutes,
            self.block.category
        )?;

        if let Some(conflict) = &self.conflict {
            writeln!(f, "- {}: {conflict}", self.status.with_icon())?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Block;

    fn scheduled(conflict: Option<String>, status: ScheduleStatus) -> ScheduledBlock {
        ScheduledBlock {
            block: Block {
                id: 5,
                title: "Almuerzo".to_string(),
                duration_minutes: 30,
                category: BlockCategory::Routine,
                completed: false,
                fixed_time: None,
            },
            start: date(2024, 3, 4).at(13, 15, 0, 0),
            end: date(2024, 3, 4).at(13, 45, 0, 0),
            status,
            conflict,
        }
    }

    #[test]
    fn test_scheduled_block_display() {
        let output = format!("{}", scheduled(None, ScheduleStatus::Normal));
        assert!(output.contains("### 5. Almuerzo ○"));
        assert!(output.contains("13:15 – 13:45 (30 min) · routine"));
        assert!(!output.contains("⚠"));
    }

    #[test]
    fn test_conflict_line_present_for_late_blocks() {
        let output = format!(
            "{}",
            scheduled(Some("Vas 15 min tarde".to_string()), ScheduleStatus::Late)
        );
        assert!(output.contains("⚠ Late: Vas 15 min tarde"));
    }
}
