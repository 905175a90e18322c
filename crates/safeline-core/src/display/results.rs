//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{desk::Submission, models::SentApprovalItem, workflow::Transition};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use safeline_core::{
///     display::CreateResult,
///     models::{ApprovalStatus, SentApprovalItem},
/// };
///
/// let item = SentApprovalItem {
///     id: 7,
///     date: "2024-05-02".to_string(),
///     title: "크레인 작업".to_string(),
///     document_type: "위험성평가".to_string(),
///     drafter: "김안전".to_string(),
///     approvers: vec!["경영책임자".to_string()],
///     current_step: 0,
///     status: ApprovalStatus::Pending,
/// };
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Requested approval with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SentApprovalItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Requested approval with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of approving or rejecting one inbox entry.
pub struct TransitionResult {
    pub received_id: u64,
    pub transition: Transition,
}

impl TransitionResult {
    pub fn new(received_id: u64, transition: Transition) -> Self {
        Self {
            received_id,
            transition,
        }
    }

    /// Whether the action changed anything.
    pub fn is_applied(&self) -> bool {
        self.transition != Transition::Ignored
    }
}

impl fmt::Display for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.transition {
            Transition::Advanced {
                sent_id,
                next_received_id,
                next_approver,
                progress,
            } => writeln!(
                f,
                "Approved entry {}. Request {sent_id} is at {progress}, waiting on {next_approver} (entry {next_received_id}).",
                self.received_id
            ),
            Transition::Completed { sent_id } => writeln!(
                f,
                "Approved entry {}. Request {sent_id} is fully approved.",
                self.received_id
            ),
            Transition::Rejected { sent_id } => writeln!(
                f,
                "Rejected entry {}. Request {sent_id} is closed.",
                self.received_id
            ),
            Transition::Ignored => writeln!(
                f,
                "Approval entry {} not found or already decided.",
                self.received_id
            ),
        }
    }
}

/// Wrapper type for displaying the result of bulk deletions.
pub struct DeleteResult {
    /// Which list was touched, e.g. "sent" or "received"
    pub list: &'static str,
    pub requested: usize,
    pub deleted: usize,
}

impl DeleteResult {
    pub fn new(list: &'static str, requested: usize, deleted: usize) -> Self {
        Self {
            list,
            requested,
            deleted,
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted {} {} approval(s)", self.deleted, self.list)?;
        if self.deleted < self.requested {
            write!(f, " ({} not found)", self.requested - self.deleted)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Submission::Saved {
                document_type,
                title,
            } => writeln!(f, "Saved {document_type} '{title}'. No approval required."),
            Submission::Requested(item) => {
                writeln!(f, "Requested approval with ID: {}", item.id)?;
                writeln!(f)?;
                write!(f, "{item}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_messages() {
        let advanced = TransitionResult::new(
            2,
            Transition::Advanced {
                sent_id: 1,
                next_received_id: 3,
                next_approver: "경영책임자".to_string(),
                progress: "1/2".to_string(),
            },
        );
        assert!(advanced.is_applied());
        assert!(advanced
            .to_string()
            .contains("Request 1 is at 1/2, waiting on 경영책임자 (entry 3)"));

        let completed = TransitionResult::new(3, Transition::Completed { sent_id: 1 });
        assert!(completed.to_string().contains("fully approved"));

        let ignored = TransitionResult::new(99, Transition::Ignored);
        assert!(!ignored.is_applied());
        assert!(ignored.to_string().contains("not found or already decided"));
    }

    #[test]
    fn test_delete_result_reports_missing() {
        assert_eq!(
            DeleteResult::new("sent", 2, 2).to_string(),
            "Deleted 2 sent approval(s)\n"
        );
        assert_eq!(
            DeleteResult::new("received", 3, 1).to_string(),
            "Deleted 1 received approval(s) (2 not found)\n"
        );
    }

    #[test]
    fn test_saved_submission() {
        let saved = Submission::Saved {
            document_type: "안전교육".to_string(),
            title: "신규자 교육".to_string(),
        };
        assert!(saved.to_string().contains("No approval required"));
    }
}
