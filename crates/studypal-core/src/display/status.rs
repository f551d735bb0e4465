//! Confirmation and error lines shown after an action.

use std::fmt;

/// Outcome line for an action such as signing in or deleting a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// A successful outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failed outcome carrying a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Failure status for an optional view error, success otherwise.
    pub fn from_view_error(error: Option<&str>, success_message: impl Into<String>) -> Self {
        match error {
            Some(message) => Self::failure(message),
            None => Self::success(success_message),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Subject added");
        assert_eq!(success.to_string(), "Success: Subject added\n");

        let failure = OperationStatus::failure("Please sign in to save subjects");
        assert_eq!(failure.to_string(), "Error: Please sign in to save subjects\n");
    }

    #[test]
    fn test_from_view_error() {
        assert!(OperationStatus::from_view_error(None, "done").success);
        let status = OperationStatus::from_view_error(Some("boom"), "done");
        assert!(!status.success);
        assert_eq!(status.message, "boom");
    }
}
