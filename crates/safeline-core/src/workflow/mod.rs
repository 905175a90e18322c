//! Multi-step approval workflow.
//!
//! [`ApprovalStore`] owns the outbox ([`SentApprovalItem`]s), the inbox
//! ([`ReceivedApprovalItem`]s) and the approval policy. Every action is a
//! single `&mut self` call, so no caller can observe a half-applied
//! transition.
//!
//! Per request the state machine is:
//!
//! ```text
//! 결재대기 (step 0) ──approve──▶ 결재중 (step i < N) ──approve──▶ … ──▶ 결재완료
//!      │                              │
//!      └────────reject────────────────┴──────────▶ 반려
//! ```
//!
//! Each approval that leaves the request open creates one new pending inbox
//! entry for the next role in the chain. Finished steps stay in the inbox
//! as history.
//!
//! ```rust
//! use safeline_core::{
//!     models::{ApprovalSettings, ApprovalStatus, User},
//!     workflow::{ApprovalStore, Transition},
//! };
//!
//! let mut store = ApprovalStore::new(ApprovalSettings::default());
//! let requester = User::new("user", "김안전", "안전관리자");
//! let approvers = vec!["안전보건관리책임자".to_string(), "경영책임자".to_string()];
//!
//! let sent_id = store
//!     .add_approval_request(&requester, "위험성평가", "크레인 작업", &approvers)?
//!     .id;
//! let first = store.received_approvals()[0].id;
//! assert!(matches!(store.approve_request(first), Transition::Advanced { .. }));
//!
//! let second = store.received_approvals()[0].id;
//! assert_eq!(store.approve_request(second), Transition::Completed { sent_id });
//! assert_eq!(store.find_sent(sent_id).unwrap().status, ApprovalStatus::Completed);
//! # Ok::<(), safeline_core::SafelineError>(())
//! ```

use log::{debug, info, warn};

use crate::{
    error::{Result, SafelineError},
    models::{
        superior_approvers, ApprovalLine, ApprovalSettings, ApprovalStatus, DocumentSetting,
        ReceivedApprovalItem, SentApprovalItem, User,
    },
};


/// Outcome of an approve or reject action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A non-final approval: the next approver got a new inbox entry.
    Advanced {
        sent_id: u64,
        next_received_id: u64,
        next_approver: String,
        progress: String,
    },
    /// The final approval: the request is complete.
    Completed { sent_id: u64 },
    /// The request was rejected and will not advance again.
    Rejected { sent_id: u64 },
    /// Unknown id, or the step was already decided. Nothing changed.
    Ignored,
}

/// In-memory approval state: outbox, inbox and policy.
#[derive(Debug, Clone)]
pub struct ApprovalStore {
    sent: Vec<SentApprovalItem>,
    received: Vec<ReceivedApprovalItem>,
    settings: ApprovalSettings,
    next_id: u64,
}

impl Default for ApprovalStore {
    fn default() -> Self {
        Self::new(ApprovalSettings::default())
    }
}

impl ApprovalStore {
    /// Empty store using `settings` as the approval policy.
    pub fn new(settings: ApprovalSettings) -> Self {
        Self {
            sent: Vec::new(),
            received: Vec::new(),
            settings,
            next_id: 1,
        }
    }

    /// Rebuild a store from previously saved lists, most recent first.
    pub fn from_parts(
        sent: Vec<SentApprovalItem>,
        received: Vec<ReceivedApprovalItem>,
        settings: ApprovalSettings,
    ) -> Self {
        let max_id = sent
            .iter()
            .map(|s| s.id)
            .chain(received.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Self {
            sent,
            received,
            settings,
            next_id: max_id + 1,
        }
    }

    pub fn settings(&self) -> &ApprovalSettings {
        &self.settings
    }

    /// Outbox, most recent first.
    pub fn sent_approvals(&self) -> &[SentApprovalItem] {
        &self.sent
    }

    /// Inbox including decided steps, most recent first.
    pub fn received_approvals(&self) -> &[ReceivedApprovalItem] {
        &self.received
    }

    /// Pending inbox entries assigned to `role`.
    pub fn received_for_role(&self, role: &str) -> Vec<&ReceivedApprovalItem> {
        self.received
            .iter()
            .filter(|item| item.is_active() && item.approver == role)
            .collect()
    }

    pub fn find_sent(&self, id: u64) -> Option<&SentApprovalItem> {
        self.sent.iter().find(|item| item.id == id)
    }

    pub fn find_received(&self, id: u64) -> Option<&ReceivedApprovalItem> {
        self.received.iter().find(|item| item.id == id)
    }

    /// Whether saving a `document_type` document has to go through approval.
    pub fn is_approval_required(&self, document_type: &str) -> bool {
        self.settings.is_approval_required(document_type)
    }

    /// Configured approval line for `document_type`.
    pub fn get_approval_line(&self, document_type: &str) -> Option<&ApprovalLine> {
        self.settings.approval_line(document_type)
    }

    /// Open a new approval request drafted by `requester`.
    ///
    /// `approvers` is narrowed to the roles ranked strictly above the
    /// requester. When nobody remains the request is refused with
    /// [`SafelineError::NoSuperiorApprover`] and the store is unchanged.
    /// Otherwise one sent item and its first inbox entry are prepended.
    pub fn add_approval_request(
        &mut self,
        requester: &User,
        document_type: &str,
        title: &str,
        approvers: &[String],
    ) -> Result<&SentApprovalItem> {
        let chain = superior_approvers(&requester.role, approvers);
        let Some(first_approver) = chain.first().cloned() else {
            warn!(
                "approval request '{}' refused: no approver above {}",
                title, requester.role
            );
            return Err(SafelineError::NoSuperiorApprover {
                role: requester.role.clone(),
            });
        };

        let date = today();
        let sent_id = self.allocate_id();
        let received_id = self.allocate_id();

        self.received.insert(
            0,
            ReceivedApprovalItem {
                id: received_id,
                date: date.clone(),
                document_type: document_type.to_string(),
                content: title.to_string(),
                drafter: requester.name.clone(),
                approver: first_approver,
                step: 0,
                status: ApprovalStatus::Pending,
                sent_approval_id: sent_id,
            },
        );
        self.sent.insert(
            0,
            SentApprovalItem {
                id: sent_id,
                date,
                title: title.to_string(),
                document_type: document_type.to_string(),
                drafter: requester.name.clone(),
                approvers: chain,
                current_step: 0,
                status: ApprovalStatus::Pending,
            },
        );

        info!(
            "approval request {} opened by {} for {}",
            sent_id, requester.username, document_type
        );
        Ok(&self.sent[0])
    }

    /// Grant the approval represented by inbox entry `received_id`.
    pub fn approve_request(&mut self, received_id: u64) -> Transition {
        let Some((r_idx, s_idx)) = self.open_step(received_id) else {
            return Transition::Ignored;
        };

        self.received[r_idx].status = ApprovalStatus::Completed;

        let sent = &mut self.sent[s_idx];
        sent.current_step += 1;
        let sent_id = sent.id;

        if sent.current_step >= sent.approvers.len() {
            sent.status = ApprovalStatus::Completed;
            info!("approval request {} completed ({})", sent_id, sent.progress());
            return Transition::Completed { sent_id };
        }

        sent.status = ApprovalStatus::InProgress;
        let step = sent.current_step;
        let next_approver = sent.approvers[step].clone();
        let progress = sent.progress();
        let document_type = sent.document_type.clone();
        let content = sent.title.clone();
        let drafter = sent.drafter.clone();

        let next_received_id = self.allocate_id();
        self.received.insert(
            0,
            ReceivedApprovalItem {
                id: next_received_id,
                date: today(),
                document_type,
                content,
                drafter,
                approver: next_approver.clone(),
                step,
                status: ApprovalStatus::Pending,
                sent_approval_id: sent_id,
            },
        );

        debug!(
            "approval request {} advanced to {} ({})",
            sent_id, next_approver, progress
        );
        Transition::Advanced {
            sent_id,
            next_received_id,
            next_approver,
            progress,
        }
    }

    /// Reject the request behind inbox entry `received_id`. Final: the
    /// chain does not resume.
    pub fn reject_request(&mut self, received_id: u64) -> Transition {
        let Some((r_idx, s_idx)) = self.open_step(received_id) else {
            return Transition::Ignored;
        };

        self.received[r_idx].status = ApprovalStatus::Rejected;
        let sent = &mut self.sent[s_idx];
        sent.status = ApprovalStatus::Rejected;

        info!(
            "approval request {} rejected at step {}",
            sent.id,
            sent.progress()
        );
        Transition::Rejected { sent_id: sent.id }
    }

    /// Remove inbox entries by id. Linked sent items are left alone.
    pub fn delete_received_approvals(&mut self, ids: &[u64]) -> usize {
        let before = self.received.len();
        self.received.retain(|item| !ids.contains(&item.id));
        before - self.received.len()
    }

    /// Remove outbox entries by id. Their inbox entries are left alone.
    pub fn delete_sent_approvals(&mut self, ids: &[u64]) -> usize {
        let before = self.sent.len();
        self.sent.retain(|item| !ids.contains(&item.id));
        before - self.sent.len()
    }

    /// Add or replace an approval line.
    pub fn set_approval_line(&mut self, line: ApprovalLine) -> Result<()> {
        if line.id.trim().is_empty() {
            return Err(SafelineError::invalid_input("id").with_reason("must not be empty"));
        }
        if line.approvers.is_empty() {
            return Err(
                SafelineError::invalid_input("approvers").with_reason("must name at least one role")
            );
        }
        self.settings.lines.insert(line.id.clone(), line);
        Ok(())
    }

    /// Add or replace the approval policy of a document type.
    ///
    /// A type that requires approval must name an existing line.
    pub fn set_document_setting(
        &mut self,
        document_type: &str,
        setting: DocumentSetting,
    ) -> Result<()> {
        if document_type.trim().is_empty() {
            return Err(
                SafelineError::invalid_input("document_type").with_reason("must not be empty")
            );
        }
        if setting.use_approval && setting.approval_line_id.is_none() {
            return Err(SafelineError::invalid_input("approval_line_id")
                .with_reason("required when approval is enabled"));
        }
        if let Some(line_id) = setting.approval_line_id.as_deref() {
            if !self.settings.lines.contains_key(line_id) {
                return Err(SafelineError::invalid_input("approval_line_id")
                    .with_reason(format!("unknown approval line '{line_id}'")));
            }
        }
        self.settings
            .documents
            .insert(document_type.to_string(), setting);
        Ok(())
    }

    /// Locate a pending inbox entry and its open sent item.
    fn open_step(&self, received_id: u64) -> Option<(usize, usize)> {
        let Some(r_idx) = self.received.iter().position(|r| r.id == received_id) else {
            warn!("inbox entry {received_id} not found");
            return None;
        };
        let received = &self.received[r_idx];
        let Some(s_idx) = self
            .sent
            .iter()
            .position(|s| s.id == received.sent_approval_id)
        else {
            warn!(
                "inbox entry {} points at missing request {}",
                received_id, received.sent_approval_id
            );
            return None;
        };
        if !received.is_active() || self.sent[s_idx].status.is_terminal() {
            warn!(
                "inbox entry {} already decided ({})",
                received_id,
                received.status.as_str()
            );
            return None;
        }
        Some((r_idx, s_idx))
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    jiff::Zoned::now().date().to_string()
}
