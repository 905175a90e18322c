//! Error handling utilities for MCP server

use rmcp::ErrorData;
use safeline_core::SafelineError;

/// Convert desk errors to MCP errors. Refusals caused by the caller's input
/// are reported as invalid params.
pub fn to_mcp_error(message: &str, error: &SafelineError) -> ErrorData {
    if error.is_precondition() {
        ErrorData::invalid_params(format!("{message}: {error}"), None)
    } else {
        ErrorData::internal_error(format!("{message}: {error}"), None)
    }
}
