//! One-line status messages.

use std::fmt;

use crate::error::SafelineError;

/// Confirmation or refusal shown after an action that has no richer result,
/// such as a settings update or a request refused by a precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&SafelineError> for OperationStatus {
    fn from(error: &SafelineError) -> Self {
        match error {
            SafelineError::NoSuperiorApprover { role } => Self::failure(format!(
                "No approver ranks above {role}; the request was not created."
            )),
            other => Self::failure(other.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
