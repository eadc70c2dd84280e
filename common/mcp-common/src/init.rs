//! Server initialization utilities
//!
//! Logging goes to stderr because stdout carries the MCP protocol.

use rmcp::{ServerHandler, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count onto the default level for the server crate.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing for an MCP server
///
/// The crate's default level comes from `verbosity` (`info`, `debug`, `trace`);
/// `RUST_LOG` can still add or override directives. Set `LOG_FORMAT=json` for
/// structured output, otherwise plain text without ANSI colors is written.
///
/// # Example
///
/// ```rust,ignore
/// mcp_common::init_tracing("process_mcp", 0)?;
/// ```
pub fn init_tracing(crate_name: &str, verbosity: u8) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, level_for(verbosity));
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Serve an already-constructed handler over stdio until the client disconnects
pub async fn serve_stdio<S: ServerHandler>(server: S) -> anyhow::Result<()> {
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
