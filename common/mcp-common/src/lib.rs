//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and [`serve_stdio`]
//! - **Results**: helpers for building and reading `CallToolResult`
//! - **Errors**: constructors for protocol-level errors
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{invalid_params, unknown_tool, McpResult};
pub use init::{init_tracing, serve_stdio};
pub use result::{result_text, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
