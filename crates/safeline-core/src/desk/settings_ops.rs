//! Approval policy operations for the Desk.

use super::Desk;
use crate::{
    display::OperationStatus,
    error::Result,
    models::{ApprovalLine, ApprovalSettings, DocumentSetting},
    params::{SetApprovalLine, SetDocumentSetting},
};

impl Desk {
    /// Current approval lines and document settings.
    pub async fn settings(&self) -> Result<ApprovalSettings> {
        self.read_store(|store, _| store.settings().clone()).await
    }

    /// Adds or replaces an approval line.
    pub async fn set_approval_line(&self, params: &SetApprovalLine) -> Result<OperationStatus> {
        let line = ApprovalLine::from(params.clone());
        self.with_store(move |store, _| {
            let message = format!("Saved approval line '{}': {}", line.id, line.approvers.join(" → "));
            store.set_approval_line(line)?;
            Ok(OperationStatus::success(message))
        })
        .await
    }

    /// Changes the approval policy of one document type.
    pub async fn set_document_setting(
        &self,
        params: &SetDocumentSetting,
    ) -> Result<OperationStatus> {
        let document_type = params.document_type.clone();
        let setting = DocumentSetting::from(params);
        self.with_store(move |store, _| {
            let message = if setting.use_approval {
                format!("{document_type} now requires approval")
            } else {
                format!("{document_type} no longer requires approval")
            };
            store.set_document_setting(&document_type, setting)?;
            Ok(OperationStatus::success(message))
        })
        .await
    }
}
