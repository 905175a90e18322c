//! Parameter structures for safeline operations.
//!
//! These are shared by the CLI and the MCP server. They carry no framework
//! derives apart from serde and, behind the `schema` feature, schemars:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap structs with `From`, the MCP server wraps these
//! types transparently.

use std::path::PathBuf;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SafelineError},
    filter::{normalize_date, CategoryFilter, FilterBar, DEFAULT_DATE_KEY},
    models::{ApprovalLine, DocumentSetting},
    pagination::DEFAULT_PAGE_SIZE,
};

/// Parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the approval entry to operate on
    pub id: u64,
}

/// Parameters for bulk deletions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Ids {
    /// IDs of the entries to delete; unknown IDs are skipped
    pub ids: Vec<u64>,
}

/// Parameters for opening an approval request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RequestApproval {
    /// Document type, e.g. 'TBM', '안전점검', '위험성평가'
    pub document_type: String,
    /// Title of the document being approved
    pub title: String,
    /// Approver roles in order. When empty, the approval line configured for
    /// the document type is used. Roles not ranked above the requester are
    /// dropped.
    #[serde(default)]
    pub approvers: Vec<String>,
}

/// Parameters for saving a document, requesting approval when its type
/// requires it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SubmitDocument {
    /// Document type, e.g. 'TBM', '안전교육'
    pub document_type: String,
    /// Title of the document
    pub title: String,
}

/// Parameters for listing the inbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListReceived {
    /// Include decided entries and entries assigned to other roles
    #[serde(default)]
    pub all: bool,
}

/// Parameters for adding or replacing an approval line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetApprovalLine {
    /// Line identifier, e.g. 'standard'
    pub id: String,
    /// Human readable name
    pub name: String,
    /// Approver roles in approval order
    pub approvers: Vec<String>,
}

impl From<SetApprovalLine> for ApprovalLine {
    fn from(params: SetApprovalLine) -> Self {
        ApprovalLine {
            id: params.id,
            name: params.name,
            approvers: params.approvers,
        }
    }
}

/// Parameters for changing the approval policy of a document type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetDocumentSetting {
    /// Document type the policy applies to
    pub document_type: String,
    /// Whether saving this document type requires approval
    pub use_approval: bool,
    /// Approval line used for the document type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_line_id: Option<String>,
}

impl From<&SetDocumentSetting> for DocumentSetting {
    fn from(params: &SetDocumentSetting) -> Self {
        DocumentSetting {
            use_approval: params.use_approval,
            approval_line_id: params.approval_line_id.clone(),
        }
    }
}

/// Parameters for filtering and paging a JSON array of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FilterRecords {
    /// Path to a JSON file holding an array of objects
    pub path: PathBuf,
    /// Field holding the record date (default 'date')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_key: Option<String>,
    /// Fields searched by the free-text query
    #[serde(default)]
    pub search_keys: Vec<String>,
    /// Inclusive lower date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper date bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Case-insensitive free-text query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Education course filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    /// Education target filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Inspection field filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Inspection kind filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Report document type filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// 1-based page number; out of range pages are clamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Rows per page (default 10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl FilterRecords {
    /// Check that the date bounds are real calendar dates.
    ///
    /// The filter itself tolerates any text, but a typo in a bound given on
    /// the command line would silently change the result.
    pub fn validate(&self) -> Result<()> {
        for (field, bound) in [("start_date", &self.start_date), ("end_date", &self.end_date)] {
            let Some(bound) = bound.as_deref().filter(|b| !b.is_empty()) else {
                continue;
            };
            let normalized = normalize_date(bound).ok_or_else(|| {
                SafelineError::invalid_input(field)
                    .with_reason(format!("Invalid date: {bound}. Expected YYYY-MM-DD"))
            })?;
            normalized.parse::<jiff::civil::Date>().map_err(|e| {
                SafelineError::invalid_input(field).with_reason(format!("Invalid date: {bound}: {e}"))
            })?;
        }
        Ok(())
    }

    /// Build the filter state with the search already committed.
    pub fn filter_bar(&self) -> FilterBar {
        let date_key = self.date_key.as_deref().unwrap_or(DEFAULT_DATE_KEY);
        let mut bar = FilterBar::new(date_key, self.search_keys.iter().cloned());

        if let Some(start) = &self.start_date {
            bar.set_start_date(start);
        }
        if let Some(end) = &self.end_date {
            bar.set_end_date(end);
        }
        if let Some(search) = &self.search {
            bar.set_search_text(search.clone());
            bar.handle_search();
        }

        let categories = [
            (CategoryFilter::EducationCourse, &self.course),
            (CategoryFilter::EducationTarget, &self.target),
            (CategoryFilter::InspectionField, &self.field),
            (CategoryFilter::InspectionKind, &self.kind),
            (CategoryFilter::ReportDocumentType, &self.document_type),
        ];
        for (category, value) in categories {
            if let Some(value) = value {
                bar.set_category(category, value.clone());
            }
        }
        bar
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
