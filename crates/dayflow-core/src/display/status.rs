//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
///
/// Planner commands never fail on invalid input; they either apply or are
/// silently ignored. This wrapper surfaces which of the two happened.
pub struct OperationStatus {
    pub message: String,
    pub applied: bool,
}

impl OperationStatus {
    /// Create a status for a command that applied.
    pub fn applied(message: String) -> Self {
        Self {
            message,
            applied: true,
        }
    }

    /// Create a status for a command that was rejected as a no-op.
    pub fn ignored(message: String) -> Self {
        Self {
            message,
            applied: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.applied { "Done:" } else { "Ignored:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let applied = OperationStatus::applied("block deleted".to_string());
        assert!(format!("{applied}").contains("Done:"));

        let ignored = OperationStatus::ignored("no such block".to_string());
        assert!(format!("{ignored}").contains("Ignored:"));
    }
}
