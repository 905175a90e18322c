//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use safeline_core::{display::CreateResult, params as core, Desk};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so the MCP
// layer can derive Deserialize and JsonSchema without touching core types.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type Ids = McpParams<core::Ids>;
pub type RequestApproval = McpParams<core::RequestApproval>;
pub type SubmitDocument = McpParams<core::SubmitDocument>;
pub type ListReceived = McpParams<core::ListReceived>;
pub type SetApprovalLine = McpParams<core::SetApprovalLine>;
pub type SetDocumentSetting = McpParams<core::SetDocumentSetting>;
pub type FilterRecords = McpParams<core::FilterRecords>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    desk: Arc<Mutex<Desk>>,
}

impl McpHandlers {
    pub fn new(desk: Arc<Mutex<Desk>>) -> Self {
        Self { desk }
    }

    pub async fn request_approval(
        &self,
        Parameters(params): Parameters<RequestApproval>,
    ) -> McpResult {
        debug!("request_approval: {:?}", params);

        let sent = self
            .desk
            .lock()
            .await
            .request_approval(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to request approval", &e))?;

        text(CreateResult::new(sent).to_string())
    }

    pub async fn submit_document(
        &self,
        Parameters(params): Parameters<SubmitDocument>,
    ) -> McpResult {
        debug!("submit_document: {:?}", params);

        let submission = self
            .desk
            .lock()
            .await
            .submit_document(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to submit document", &e))?;

        text(submission.to_string())
    }

    pub async fn approve(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("approve: {:?}", params);

        let result = self
            .desk
            .lock()
            .await
            .approve(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to approve", &e))?;

        text(result.to_string())
    }

    pub async fn reject(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("reject: {:?}", params);

        let result = self
            .desk
            .lock()
            .await
            .reject(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reject", &e))?;

        text(result.to_string())
    }

    pub async fn list_sent(&self) -> McpResult {
        debug!("list_sent");

        let sent = self
            .desk
            .lock()
            .await
            .sent_approvals()
            .await
            .map_err(|e| to_mcp_error("Failed to list sent approvals", &e))?;

        text(format!("# Sent Approvals\n\n{sent}"))
    }

    pub async fn list_received(&self, Parameters(params): Parameters<ListReceived>) -> McpResult {
        debug!("list_received: {:?}", params);

        let desk = self.desk.lock().await;
        let received = desk
            .received_approvals(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list received approvals", &e))?;

        let title = if params.as_ref().all {
            "Received Approvals".to_string()
        } else {
            format!("Pending for {}", desk.user().role)
        };
        text(format!("# {title}\n\n{received}"))
    }

    pub async fn delete_sent(&self, Parameters(params): Parameters<Ids>) -> McpResult {
        debug!("delete_sent: {:?}", params);

        let result = self
            .desk
            .lock()
            .await
            .delete_sent(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete sent approvals", &e))?;

        text(result.to_string())
    }

    pub async fn delete_received(&self, Parameters(params): Parameters<Ids>) -> McpResult {
        debug!("delete_received: {:?}", params);

        let result = self
            .desk
            .lock()
            .await
            .delete_received(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete received approvals", &e))?;

        text(result.to_string())
    }

    pub async fn show_settings(&self) -> McpResult {
        debug!("show_settings");

        let settings = self
            .desk
            .lock()
            .await
            .settings()
            .await
            .map_err(|e| to_mcp_error("Failed to load settings", &e))?;

        text(format!("# Approval Settings\n\n{settings}"))
    }

    pub async fn set_approval_line(
        &self,
        Parameters(params): Parameters<SetApprovalLine>,
    ) -> McpResult {
        debug!("set_approval_line: {:?}", params);

        let status = self
            .desk
            .lock()
            .await
            .set_approval_line(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save approval line", &e))?;

        text(status.to_string())
    }

    pub async fn set_document_setting(
        &self,
        Parameters(params): Parameters<SetDocumentSetting>,
    ) -> McpResult {
        debug!("set_document_setting: {:?}", params);

        let status = self
            .desk
            .lock()
            .await
            .set_document_setting(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save document setting", &e))?;

        text(status.to_string())
    }

    pub async fn filter_records(&self, Parameters(params): Parameters<FilterRecords>) -> McpResult {
        debug!("filter_records: {:?}", params);

        let table = self
            .desk
            .lock()
            .await
            .filter_records(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to filter records", &e))?;

        text(table.to_string())
    }
}
