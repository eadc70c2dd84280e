//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content, RawContent};

/// Create a successful plain text response
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     Ok(text_success("return code: 0\n"))
/// }
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Concatenate every text item of a tool result
///
/// Non-text content is skipped. Mostly useful for callers that only care
/// about the rendered report, such as tests and embedding hosts.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
