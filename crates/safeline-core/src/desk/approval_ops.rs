//! Approval request operations for the Desk.

use super::{Desk, Submission};
use crate::{
    display::{DeleteResult, ReceivedApprovals, SentApprovals, TransitionResult},
    error::{Result, SafelineError},
    models::{SentApprovalItem, User},
    params::{Id, Ids, ListReceived, RequestApproval, SubmitDocument},
    workflow::ApprovalStore,
};

/// Approvers given explicitly, or the line configured for the document type.
fn resolve_approvers(
    store: &ApprovalStore,
    document_type: &str,
    approvers: &[String],
) -> Result<Vec<String>> {
    if !approvers.is_empty() {
        return Ok(approvers.to_vec());
    }
    store
        .get_approval_line(document_type)
        .map(|line| line.approvers.clone())
        .ok_or_else(|| {
            SafelineError::invalid_input("approvers").with_reason(format!(
                "no approvers given and no approval line configured for '{document_type}'"
            ))
        })
}

fn open_request(
    store: &mut ApprovalStore,
    user: &User,
    document_type: &str,
    title: &str,
    approvers: &[String],
) -> Result<SentApprovalItem> {
    let chain = resolve_approvers(store, document_type, approvers)?;
    store
        .add_approval_request(user, document_type, title, &chain)
        .cloned()
}

impl Desk {
    /// Opens an approval request drafted by the current user.
    ///
    /// Fails with `SafelineError::NoSuperiorApprover` when no approver ranks
    /// above the user. Nothing is stored in that case.
    pub async fn request_approval(&self, params: &RequestApproval) -> Result<SentApprovalItem> {
        let params = params.clone();
        self.with_store(move |store, user| {
            open_request(
                store,
                user,
                &params.document_type,
                &params.title,
                &params.approvers,
            )
        })
        .await
    }

    /// Saves a document, opening an approval request on the configured line
    /// when its type requires approval.
    pub async fn submit_document(&self, params: &SubmitDocument) -> Result<Submission> {
        let params = params.clone();
        self.with_store(move |store, user| {
            if !store.is_approval_required(&params.document_type) {
                return Ok(Submission::Saved {
                    document_type: params.document_type,
                    title: params.title,
                });
            }
            open_request(store, user, &params.document_type, &params.title, &[])
                .map(Submission::Requested)
        })
        .await
    }

    /// Approves the inbox entry with the given ID.
    pub async fn approve(&self, params: &Id) -> Result<TransitionResult> {
        let id = params.id;
        self.with_store(move |store, _| Ok(TransitionResult::new(id, store.approve_request(id))))
            .await
    }

    /// Rejects the inbox entry with the given ID.
    pub async fn reject(&self, params: &Id) -> Result<TransitionResult> {
        let id = params.id;
        self.with_store(move |store, _| Ok(TransitionResult::new(id, store.reject_request(id))))
            .await
    }

    /// Outbox, most recent first.
    pub async fn sent_approvals(&self) -> Result<SentApprovals> {
        self.read_store(|store, _| SentApprovals(store.sent_approvals().to_vec()))
            .await
    }

    /// Pending entries for the current user's role, or the whole inbox
    /// with `all`.
    pub async fn received_approvals(&self, params: &ListReceived) -> Result<ReceivedApprovals> {
        let all = params.all;
        self.read_store(move |store, user| {
            let items = if all {
                store.received_approvals().to_vec()
            } else {
                store
                    .received_for_role(&user.role)
                    .into_iter()
                    .cloned()
                    .collect()
            };
            ReceivedApprovals(items)
        })
        .await
    }

    pub async fn delete_sent(&self, params: &Ids) -> Result<DeleteResult> {
        let ids = params.ids.clone();
        self.with_store(move |store, _| {
            let deleted = store.delete_sent_approvals(&ids);
            Ok(DeleteResult::new("sent", ids.len(), deleted))
        })
        .await
    }

    pub async fn delete_received(&self, params: &Ids) -> Result<DeleteResult> {
        let ids = params.ids.clone();
        self.with_store(move |store, _| {
            let deleted = store.delete_received_approvals(&ids);
            Ok(DeleteResult::new("received", ids.len(), deleted))
        })
        .await
    }
}
