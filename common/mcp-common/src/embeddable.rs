//! Embeddable MCP trait for in-process execution
//!
//! Lets a host (or a test) drive an MCP server's tools directly, without a
//! stdio transport in between.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use process_mcp::ProcessMcpServer;
//!
//! let server = ProcessMcpServer::with_config(config)?;
//! let tools = server.list_tools();
//! let result = server.call_tool("exec", serde_json::json!({ "input": "ls" })).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters passed to the tool
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Any other protocol error raised by the server
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        if err.code == rmcp::model::ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(err.message.to_string())
        } else {
            EmbeddableError::McpError(err.message.to_string())
        }
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync` so that several tool calls can be
/// in flight from different tasks at once.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Returns the server name used in MCP configuration files
    fn server_name(&self) -> &str;

    /// Returns every tool the server currently advertises
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Returns an optional description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoServer;

    #[async_trait]
    impl EmbeddableMcp for EchoServer {
        fn server_name(&self) -> &str {
            "echo"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let server = EchoServer;
        assert_eq!(server.server_name(), "echo");
        assert!(server.server_description().is_none());
        assert!(server.list_tools().is_empty());
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = EchoServer.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[test]
    fn test_invalid_params_maps_to_variant() {
        let err: EmbeddableError = crate::invalid_params("timeout must be positive").into();
        assert!(matches!(err, EmbeddableError::InvalidParams(m) if m.contains("timeout")));

        let err: EmbeddableError = rmcp::ErrorData::internal_error("boom", None).into();
        assert!(matches!(err, EmbeddableError::McpError(_)));
    }
}
