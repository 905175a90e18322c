//! Per-document-type approval policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered chain of approver roles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalLine {
    /// Stable identifier referenced by document settings
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Approver roles in signing order
    pub approvers: Vec<String>,
}

/// Approval policy for one document type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSetting {
    /// Whether saving this document type needs approval
    pub use_approval: bool,

    /// Approval line to route through
    pub approval_line_id: Option<String>,
}

/// All approval lines plus the document-type lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalSettings {
    /// Approval lines keyed by id
    pub lines: BTreeMap<String, ApprovalLine>,

    /// Document settings keyed by document type
    pub documents: BTreeMap<String, DocumentSetting>,
}

impl ApprovalSettings {
    /// Empty settings with no lines and no document policies.
    pub fn empty() -> Self {
        Self {
            lines: BTreeMap::new(),
            documents: BTreeMap::new(),
        }
    }

    /// Whether `document_type` has a setting with approval turned on.
    pub fn is_approval_required(&self, document_type: &str) -> bool {
        self.documents
            .get(document_type)
            .is_some_and(|setting| setting.use_approval)
    }

    /// Resolve `document_type → approval_line_id → ApprovalLine`.
    pub fn approval_line(&self, document_type: &str) -> Option<&ApprovalLine> {
        let line_id = self
            .documents
            .get(document_type)?
            .approval_line_id
            .as_deref()?;
        self.lines.get(line_id)
    }

    fn line(id: &str, name: &str, approvers: &[&str]) -> (String, ApprovalLine) {
        (
            id.to_string(),
            ApprovalLine {
                id: id.to_string(),
                name: name.to_string(),
                approvers: approvers.iter().map(|a| a.to_string()).collect(),
            },
        )
    }

    fn document(use_approval: bool, line_id: &str) -> DocumentSetting {
        DocumentSetting {
            use_approval,
            approval_line_id: Some(line_id.to_string()),
        }
    }
}

impl Default for ApprovalSettings {
    /// Built-in policy seeded into a fresh store.
    fn default() -> Self {
        let lines = [
            Self::line(
                "standard",
                "기본 결재라인",
                &["관리감독자", "안전관리자", "안전보건관리책임자"],
            ),
            Self::line(
                "executive",
                "경영진 결재라인",
                &["안전관리자", "안전보건관리책임자", "경영책임자"],
            ),
            Self::line(
                "health",
                "보건 결재라인",
                &["보건관리자", "안전보건관리책임자"],
            ),
        ]
        .into_iter()
        .collect();

        let documents = [
            ("TBM", Self::document(true, "standard")),
            ("안전점검", Self::document(true, "standard")),
            ("위험성평가", Self::document(true, "executive")),
            ("작업허가서", Self::document(true, "executive")),
            ("건강검진", Self::document(true, "health")),
            ("안전교육", Self::document(false, "standard")),
        ]
        .into_iter()
        .map(|(doc, setting)| (doc.to_string(), setting))
        .collect();

        Self { lines, documents }
    }
}
