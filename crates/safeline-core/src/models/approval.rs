//! Outbound approval requests and inbox entries.

use serde::{Deserialize, Serialize};

use super::ApprovalStatus;

/// One outbound approval request as seen by its drafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentApprovalItem {
    /// Unique identifier, shared id space with received items
    pub id: u64,

    /// Creation date (`YYYY-MM-DD`)
    pub date: String,

    /// Title of the document awaiting approval
    pub title: String,

    /// Document type the approval policy was resolved for
    pub document_type: String,

    /// Display name of the requester
    pub drafter: String,

    /// Ordered approver roles, already filtered to the requester's superiors
    pub approvers: Vec<String>,

    /// Number of approvals granted so far (0-based index of the next approver)
    pub current_step: usize,

    /// Current status of the request
    pub status: ApprovalStatus,
}

impl SentApprovalItem {
    /// Progress as `"{current_step}/{approvers}"`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.current_step, self.approvers.len())
    }

    /// Last approver in the chain.
    pub fn final_approver(&self) -> Option<&str> {
        self.approvers.last().map(String::as_str)
    }

    /// Role whose approval is awaited, if the request is still open.
    pub fn current_approver(&self) -> Option<&str> {
        if self.status.is_terminal() {
            return None;
        }
        self.approvers.get(self.current_step).map(String::as_str)
    }
}

/// One inbox entry: a single approver's task for a sent request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceivedApprovalItem {
    /// Unique identifier
    pub id: u64,

    /// Date the task was assigned (`YYYY-MM-DD`)
    pub date: String,

    /// Document type of the linked request
    pub document_type: String,

    /// Title of the linked document
    pub content: String,

    /// Display name of the requester
    pub drafter: String,

    /// Role this task is assigned to
    pub approver: String,

    /// Position of `approver` in the linked chain
    pub step: usize,

    /// Status of this step
    pub status: ApprovalStatus,

    /// Back-reference to the [`SentApprovalItem`]
    pub sent_approval_id: u64,
}

impl ReceivedApprovalItem {
    /// Whether this is the active task of an open request.
    pub fn is_active(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}
