//! Process MCP Library
//!
//! Exposes one tool that runs an operating-system command behind a fixed
//! launcher prefix (e.g. `sh -c` or `wsl.exe --cd DIR`) and returns its exit
//! code, stdout and stderr as text.
//!
//! A request flows through [`guard::CommandGuard`] (advisory deny list),
//! [`executor::ProcessExecutor`] (spawn with timeout), [`filter::OutputFilter`]
//! (control-sequence stripping) and [`render`] (report text), orchestrated by
//! [`gateway::Gateway`].
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use process_mcp::{ExecutionRequest, Gateway, GatewayConfig};
//!
//! let gateway = Gateway::new(GatewayConfig::builder().launcher("sh -c").build()?);
//! let result = gateway.execute(ExecutionRequest::new("echo hello")).await;
//! assert!(result.text.contains("STDOUT:\nhello\n"));
//! ```

pub mod cli;
pub mod config;
pub mod executor;
pub mod filter;
pub mod gateway;
pub mod guard;
pub mod params;
pub mod render;
pub mod server;
pub mod types;

pub use gateway::{Gateway, GatewayConfig, GatewayConfigBuilder};
pub use server::ProcessMcpServer;
pub use types::{Config, ExecError, ExecutionRequest, ExecutionResult, Outcome};
