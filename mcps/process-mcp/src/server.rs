//! MCP Server implementation for the command execution gateway
//!
//! The tool name comes from configuration, so tools are listed and
//! dispatched by hand instead of through a compile-time tool router.

use std::sync::Arc;

use mcp_common::{
    async_trait, invalid_params, text_success, unknown_tool, CallToolResult, EmbeddableError,
    EmbeddableMcp, EmbeddableResult, McpError, McpResult, Tool,
};
use rmcp::{
    model::{
        CallToolRequestParam, JsonObject, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use serde_json::Value;

use crate::gateway::{Gateway, GatewayConfig};
use crate::params::{input_schema, ExecParams};
use crate::types::{Config, ExecError, ToolConfig};

/// The process MCP server
#[derive(Debug, Clone)]
pub struct ProcessMcpServer {
    gateway: Gateway,
    tool: ToolConfig,
}

impl ProcessMcpServer {
    /// Create a server from a fully merged config
    pub fn with_config(config: Config) -> Result<Self, ExecError> {
        let gateway = Gateway::new(GatewayConfig::from_config(&config)?);
        Ok(Self::with_gateway(gateway, config.tool))
    }

    pub fn with_gateway(gateway: Gateway, tool: ToolConfig) -> Self {
        Self { gateway, tool }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Advertised tools: the exec tool, or nothing when its name is empty
    pub fn tools(&self) -> Vec<Tool> {
        if self.tool.name.is_empty() {
            return Vec::new();
        }

        let schema = input_schema(self.gateway.config().default_timeout_secs());
        vec![Tool::new(
            self.tool.name.clone(),
            self.tool.description.clone(),
            Arc::new(schema),
        )]
    }

    /// Shared dispatch path for the stdio handler and in-process callers
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> McpResult<CallToolResult> {
        if self.tool.name.is_empty() || name != self.tool.name {
            tracing::warn!("Unknown tool: {}", name);
            return Err(unknown_tool(name));
        }

        let arguments = arguments.ok_or_else(|| invalid_params("Missing arguments"))?;
        let request = ExecParams::from_arguments(arguments)?.into_request()?;

        let result = self.gateway.execute(request).await;
        Ok(text_success(result.text))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

impl ServerHandler for ProcessMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Command execution server. Each command runs as `{} <command>` \
                 with a timeout. Commands containing forbidden words are refused \
                 with a warning; reformulate them or confirm explicitly.",
                self.gateway.config().launcher().prefix()
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for ProcessMcpServer {
    fn server_name(&self) -> &str {
        "mcp-process"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Runs commands behind a fixed launcher prefix and returns exit code, stdout and stderr.")
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let arguments = match params {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                return Err(EmbeddableError::InvalidParams(format!(
                    "arguments must be an object, got {}",
                    other
                )))
            }
        };

        self.dispatch(name, arguments).await.map_err(Into::into)
    }
}
