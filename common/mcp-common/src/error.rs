//! Protocol-level error constructors
//!
//! Tool results carry expected failures as text. These helpers are for the
//! conditions that indicate a caller or integration bug instead.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Create an invalid params error with a message
///
/// Use this when the tool receives arguments it cannot work with.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

/// Error for a `tools/call` naming a tool this server does not expose
pub fn unknown_tool(name: &str) -> McpError {
    McpError::invalid_params(format!("Unknown tool: {}", name), None)
}
