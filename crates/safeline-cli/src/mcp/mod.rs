//! MCP server implementation for Safeline
//!
//! Exposes the approval desk and the record filter as Model Context Protocol
//! tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use safeline_core::Desk;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    FilterRecords, Id, Ids, ListReceived, McpResult, RequestApproval, SetApprovalLine,
    SetDocumentSetting, SubmitDocument,
};

/// MCP server for Safeline
#[derive(Clone)]
pub struct SafelineMcpServer {
    desk: Arc<Mutex<Desk>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SafelineMcpServer {
    pub fn new(desk: Desk) -> Self {
        Self {
            desk: Arc::new(Mutex::new(desk)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.desk.clone())
    }

    #[tool(
        name = "request_approval",
        description = "Open an approval request for a safety document as the signed-in user. Provide document_type (e.g. 'TBM', '안전점검', '위험성평가') and title. approvers is an ordered list of roles; leave it empty to use the approval line configured for the document type. Roles not ranked above the requester are dropped, and the request is refused when none remain."
    )]
    async fn request_approval(&self, params: Parameters<RequestApproval>) -> McpResult {
        self.handlers().request_approval(params).await
    }

    #[tool(
        name = "submit_document",
        description = "Save a document. When its document type requires approval, an approval request is opened on the configured approval line; otherwise the document is saved without approval."
    )]
    async fn submit_document(&self, params: Parameters<SubmitDocument>) -> McpResult {
        self.handlers().submit_document(params).await
    }

    #[tool(
        name = "approve",
        description = "Approve a pending inbox entry by its ID. Advances the request to the next approver, or completes it after the final approver. Entries that are unknown or already decided are reported and left unchanged."
    )]
    async fn approve(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().approve(params).await
    }

    #[tool(
        name = "reject",
        description = "Reject a pending inbox entry by its ID. The whole request becomes 반려 (rejected) and will not advance again."
    )]
    async fn reject(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().reject(params).await
    }

    #[tool(
        name = "list_sent",
        description = "List sent approval requests, most recent first, with status, approver chain and progress."
    )]
    async fn list_sent(&self) -> McpResult {
        self.handlers().list_sent().await
    }

    #[tool(
        name = "list_received",
        description = "List inbox entries. By default only pending entries for the signed-in user's role; all=true lists every entry including decided ones."
    )]
    async fn list_received(&self, params: Parameters<ListReceived>) -> McpResult {
        self.handlers().list_received(params).await
    }

    #[tool(
        name = "delete_sent",
        description = "Delete sent approval requests by ID. Their inbox entries are kept."
    )]
    async fn delete_sent(&self, params: Parameters<Ids>) -> McpResult {
        self.handlers().delete_sent(params).await
    }

    #[tool(
        name = "delete_received",
        description = "Delete inbox entries by ID. The requests they belong to are kept."
    )]
    async fn delete_received(&self, params: Parameters<Ids>) -> McpResult {
        self.handlers().delete_received(params).await
    }

    #[tool(
        name = "show_settings",
        description = "Show the approval lines and, per document type, whether approval is required and which line is used."
    )]
    async fn show_settings(&self) -> McpResult {
        self.handlers().show_settings().await
    }

    #[tool(
        name = "set_approval_line",
        description = "Add or replace an approval line: id, name and the ordered approver roles."
    )]
    async fn set_approval_line(&self, params: Parameters<SetApprovalLine>) -> McpResult {
        self.handlers().set_approval_line(params).await
    }

    #[tool(
        name = "set_document_setting",
        description = "Set whether a document type requires approval and which approval line it uses. The line must exist."
    )]
    async fn set_document_setting(&self, params: Parameters<SetDocumentSetting>) -> McpResult {
        self.handlers().set_document_setting(params).await
    }

    #[tool(
        name = "filter_records",
        description = "Filter a JSON file holding an array of records and return one page as a markdown table. Supports an inclusive date range on date_key (records without a readable date are kept), a case-insensitive search over search_keys, category filters (course, target, field, kind, document_type) and paging (page, page_size)."
    )]
    async fn filter_records(&self, params: Parameters<FilterRecords>) -> McpResult {
        self.handlers().filter_records(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SafelineMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "safeline".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Safeline keeps approval requests for workplace safety documents (TBM logs, inspections, risk assessments, work permits, health checks, education records).

## Core Concepts
- **Roles** rank 관리감독자 < 안전관리자 < 보건관리자 < 안전보건관리책임자 < 경영책임자
- **Approval lines**: ordered approver roles, chosen per document type
- **Sent approvals**: requests opened by the signed-in user, with progress like 1/2
- **Received approvals**: one inbox entry per approval step

## Workflow
1. `request_approval` or `submit_document` opens a request (결재대기)
2. `list_received` shows pending entries; `approve` moves the request to the next approver (결재중) or completes it (결재완료)
3. `reject` closes the request (반려)

## Records
`filter_records` filters and pages a JSON record export the way list screens do."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SafelineMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Safeline MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
