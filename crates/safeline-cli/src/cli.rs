//! Command-line interface definitions and handlers
//!
//! Every command has a clap `Args` struct that converts into the matching
//! core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Desk
//! ```
//!
//! Core parameter types stay free of clap attributes so the MCP server can
//! reuse them unchanged.

use std::{fmt::Display, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use safeline_core::{
    display::OperationStatus,
    params::{
        FilterRecords, Id, Ids, ListReceived, RequestApproval, SetApprovalLine,
        SetDocumentSetting, SubmitDocument,
    },
    CreateResult, Desk,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Record commands
// ============================================================================

/// Filter a JSON array of records and print one page as a table
///
/// Records whose date is missing or unreadable are kept by the date range.
/// The search only looks at the fields named with --search-key.
#[derive(Args)]
pub struct FilterRecordsArgs {
    /// JSON file holding an array of objects
    pub file: PathBuf,
    /// Field holding the record date
    #[arg(long, help = "Field holding the record date (default 'date')")]
    pub date_key: Option<String>,
    /// Field searched by --search; repeat or separate with commas
    #[arg(long = "search-key", value_delimiter = ',')]
    pub search_keys: Vec<String>,
    /// Inclusive lower date bound, e.g. 2024-03-01
    #[arg(long)]
    pub from: Option<String>,
    /// Inclusive upper date bound, e.g. 2024-03-31
    #[arg(long)]
    pub to: Option<String>,
    /// Case-insensitive text to look for in the search keys
    #[arg(short, long)]
    pub search: Option<String>,
    /// Education course filter
    #[arg(long)]
    pub course: Option<String>,
    /// Education target filter
    #[arg(long)]
    pub target: Option<String>,
    /// Inspection field filter
    #[arg(long)]
    pub field: Option<String>,
    /// Inspection kind filter
    #[arg(long)]
    pub kind: Option<String>,
    /// Report document type filter
    #[arg(long)]
    pub document_type: Option<String>,
    /// Page to show, clamped to the available pages
    #[arg(short, long)]
    pub page: Option<usize>,
    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl From<FilterRecordsArgs> for FilterRecords {
    fn from(val: FilterRecordsArgs) -> Self {
        FilterRecords {
            path: val.file,
            date_key: val.date_key,
            search_keys: val.search_keys,
            start_date: val.from,
            end_date: val.to,
            search: val.search,
            course: val.course,
            target: val.target,
            field: val.field,
            kind: val.kind,
            document_type: val.document_type,
            page: val.page,
            page_size: val.page_size,
        }
    }
}

#[derive(Subcommand)]
pub enum RecordCommands {
    /// Filter and page a JSON record list
    Filter(FilterRecordsArgs),
}

// ============================================================================
// Approval commands
// ============================================================================

/// Open an approval request
///
/// Without --approver the approval line configured for the document type is
/// used. Approvers not ranked above the signed-in user are dropped.
#[derive(Args)]
pub struct RequestApprovalArgs {
    /// Document type, e.g. TBM, 안전점검, 위험성평가
    #[arg(long = "type")]
    pub document_type: String,
    /// Title of the document
    #[arg(long)]
    pub title: String,
    /// Approver role, in order; repeat for each step
    #[arg(long = "approver")]
    pub approvers: Vec<String>,
}

impl From<RequestApprovalArgs> for RequestApproval {
    fn from(val: RequestApprovalArgs) -> Self {
        RequestApproval {
            document_type: val.document_type,
            title: val.title,
            approvers: val.approvers,
        }
    }
}

/// Save a document, requesting approval when its type requires it
#[derive(Args)]
pub struct SubmitDocumentArgs {
    /// Document type
    #[arg(long = "type")]
    pub document_type: String,
    /// Title of the document
    #[arg(long)]
    pub title: String,
}

impl From<SubmitDocumentArgs> for SubmitDocument {
    fn from(val: SubmitDocumentArgs) -> Self {
        SubmitDocument {
            document_type: val.document_type,
            title: val.title,
        }
    }
}

#[derive(Args)]
pub struct DecideArgs {
    /// ID of the inbox entry
    pub id: u64,
}

impl From<DecideArgs> for Id {
    fn from(val: DecideArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    /// IDs to delete
    #[arg(required = true)]
    pub ids: Vec<u64>,
}

impl From<DeleteArgs> for Ids {
    fn from(val: DeleteArgs) -> Self {
        Ids { ids: val.ids }
    }
}

/// List inbox entries
#[derive(Args)]
pub struct ListReceivedArgs {
    /// Show every entry, including decided ones and other roles' entries
    #[arg(long)]
    pub all: bool,
}

impl From<ListReceivedArgs> for ListReceived {
    fn from(val: ListReceivedArgs) -> Self {
        ListReceived { all: val.all }
    }
}

#[derive(Subcommand)]
pub enum ApprovalCommands {
    /// Open an approval request
    Request(RequestApprovalArgs),
    /// Save a document, requesting approval when its type requires it
    Submit(SubmitDocumentArgs),
    /// Approve an inbox entry
    Approve(DecideArgs),
    /// Reject an inbox entry; the request is closed
    Reject(DecideArgs),
    /// List sent approval requests
    Sent,
    /// List inbox entries for the signed-in role
    Received(ListReceivedArgs),
    /// Delete sent requests; their inbox entries stay
    DeleteSent(DeleteArgs),
    /// Delete inbox entries; their requests stay
    DeleteReceived(DeleteArgs),
}

// ============================================================================
// Settings commands
// ============================================================================

/// Add or replace an approval line
#[derive(Args)]
pub struct SetLineArgs {
    /// Line identifier
    pub id: String,
    /// Human readable name
    #[arg(long)]
    pub name: String,
    /// Approver role, in order; repeat for each step
    #[arg(long = "approver", required = true)]
    pub approvers: Vec<String>,
}

impl From<SetLineArgs> for SetApprovalLine {
    fn from(val: SetLineArgs) -> Self {
        SetApprovalLine {
            id: val.id,
            name: val.name,
            approvers: val.approvers,
        }
    }
}

/// Change the approval policy of a document type
#[derive(Args)]
pub struct SetDocumentArgs {
    /// Document type
    pub document_type: String,
    /// Approval line to use
    #[arg(long)]
    pub line: Option<String>,
    /// Save documents of this type without approval
    #[arg(long)]
    pub disabled: bool,
}

impl From<SetDocumentArgs> for SetDocumentSetting {
    fn from(val: SetDocumentArgs) -> Self {
        SetDocumentSetting {
            document_type: val.document_type,
            use_approval: !val.disabled,
            approval_line_id: val.line,
        }
    }
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show approval lines and document policies
    Show,
    /// Add or replace an approval line
    SetLine(SetLineArgs),
    /// Change the approval policy of a document type
    SetDocument(SetDocumentArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against a desk and renders the results.
pub struct Cli {
    desk: Desk,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(desk: Desk, renderer: TerminalRenderer) -> Self {
        Self { desk, renderer }
    }

    pub async fn handle_records_command(&self, command: RecordCommands) -> Result<()> {
        match command {
            RecordCommands::Filter(args) => {
                let outcome = self.desk.filter_records(&FilterRecords::from(args)).await;
                self.report(outcome, "Failed to filter records")
            }
        }
    }

    pub async fn handle_approval_command(&self, command: ApprovalCommands) -> Result<()> {
        match command {
            ApprovalCommands::Request(args) => {
                let outcome = self
                    .desk
                    .request_approval(&args.into())
                    .await
                    .map(CreateResult::new);
                self.report(outcome, "Failed to request approval")
            }
            ApprovalCommands::Submit(args) => {
                let outcome = self.desk.submit_document(&args.into()).await;
                self.report(outcome, "Failed to submit document")
            }
            ApprovalCommands::Approve(args) => {
                let outcome = self.desk.approve(&args.into()).await;
                self.report(outcome, "Failed to approve")
            }
            ApprovalCommands::Reject(args) => {
                let outcome = self.desk.reject(&args.into()).await;
                self.report(outcome, "Failed to reject")
            }
            ApprovalCommands::Sent => {
                let sent = self
                    .desk
                    .sent_approvals()
                    .await
                    .context("Failed to list sent approvals")?;
                self.renderer
                    .render(&format!("# Sent Approvals\n\n{sent}"))
            }
            ApprovalCommands::Received(args) => self.list_received(&args.into()).await,
            ApprovalCommands::DeleteSent(args) => {
                let outcome = self.desk.delete_sent(&args.into()).await;
                self.report(outcome, "Failed to delete sent approvals")
            }
            ApprovalCommands::DeleteReceived(args) => {
                let outcome = self.desk.delete_received(&args.into()).await;
                self.report(outcome, "Failed to delete received approvals")
            }
        }
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {
                let settings = self
                    .desk
                    .settings()
                    .await
                    .context("Failed to load settings")?;
                self.renderer
                    .render(&format!("# Approval Settings\n\n{settings}"))
            }
            SettingsCommands::SetLine(args) => {
                let outcome = self.desk.set_approval_line(&args.into()).await;
                self.report(outcome, "Failed to save approval line")
            }
            SettingsCommands::SetDocument(args) => {
                let outcome = self.desk.set_document_setting(&args.into()).await;
                self.report(outcome, "Failed to save document setting")
            }
        }
    }

    /// Inbox for the signed-in role, or everything with `all`.
    pub async fn list_received(&self, params: &ListReceived) -> Result<()> {
        let received = self
            .desk
            .received_approvals(params)
            .await
            .context("Failed to list received approvals")?;
        let title = if params.all {
            "Received Approvals".to_string()
        } else {
            format!("Pending for {}", self.desk.user().role)
        };
        self.renderer.render(&format!("# {title}\n\n{received}"))
    }

    /// Render a result. Refused requests and invalid input are reported to
    /// the user, anything else is a failure of the tool itself.
    fn report<T: Display>(
        &self,
        outcome: safeline_core::Result<T>,
        context: &'static str,
    ) -> Result<()> {
        match outcome {
            Ok(value) => self.renderer.render(&value.to_string()),
            Err(error) if error.is_precondition() => self
                .renderer
                .render(&OperationStatus::from(&error).to_string()),
            Err(error) => Err(anyhow::Error::new(error).context(context)),
        }
    }
}
