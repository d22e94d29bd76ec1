//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Outcome of a command, rendered as a one-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// The command was valid but left everything as it was
    Unchanged,
    Failure,
}

/// Wrapper type for displaying operation confirmation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Unchanged,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }

    /// Whether the status reports an error.
    pub fn is_failure(&self) -> bool {
        self.kind == StatusKind::Failure
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Unchanged => "No change:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Race date set");
        assert_eq!(format!("{success}"), "Success: Race date set\n");

        let unchanged = OperationStatus::unchanged("slot 9:0 is outside the schedule");
        assert!(format!("{unchanged}").starts_with("No change:"));
        assert!(!unchanged.is_failure());

        let failure = OperationStatus::failure("Plan 'x' not found");
        assert!(format!("{failure}").contains("Error:"));
        assert!(failure.is_failure());
    }
}
