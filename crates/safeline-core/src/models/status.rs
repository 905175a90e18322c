//! Status enumeration for approval items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of approval statuses.
///
/// The serialized form is the Korean label shown to users, which is also what
/// the database stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ApprovalStatus {
    /// Waiting for the current approver
    #[default]
    #[serde(rename = "결재대기")]
    Pending,

    /// At least one approver signed off, more remain
    #[serde(rename = "결재중")]
    InProgress,

    /// Every approver in the chain signed off
    #[serde(rename = "결재완료")]
    Completed,

    /// Rejected at some step; terminal
    #[serde(rename = "반려")]
    Rejected,
}

impl FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "결재대기" => return Ok(ApprovalStatus::Pending),
            "결재중" => return Ok(ApprovalStatus::InProgress),
            "결재완료" => return Ok(ApprovalStatus::Completed),
            "반려" => return Ok(ApprovalStatus::Rejected),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApprovalStatus::Pending),
            "inprogress" | "in_progress" => Ok(ApprovalStatus::InProgress),
            "completed" | "complete" => Ok(ApprovalStatus::Completed),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {s}")),
        }
    }
}

impl ApprovalStatus {
    /// Korean label, used for display and as the database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "결재대기",
            ApprovalStatus::InProgress => "결재중",
            ApprovalStatus::Completed => "결재완료",
            ApprovalStatus::Rejected => "반려",
        }
    }

    /// Whether no further transition can leave this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalStatus::Completed | ApprovalStatus::Rejected)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use safeline_core::models::ApprovalStatus;
    ///
    /// assert_eq!(ApprovalStatus::Completed.with_icon(), "✓ 결재완료");
    /// assert_eq!(ApprovalStatus::InProgress.with_icon(), "➤ 결재중");
    /// assert_eq!(ApprovalStatus::Pending.with_icon(), "○ 결재대기");
    /// assert_eq!(ApprovalStatus::Rejected.with_icon(), "✗ 반려");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ApprovalStatus::Completed => "✓ 결재완료",
            ApprovalStatus::InProgress => "➤ 결재중",
            ApprovalStatus::Pending => "○ 결재대기",
            ApprovalStatus::Rejected => "✗ 반려",
        }
    }
}
