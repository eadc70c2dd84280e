//! Process MCP - runs commands behind a fixed launcher prefix over stdio

use clap::Parser;

use process_mcp::cli::Cli;
use process_mcp::config::load_config;
use process_mcp::ProcessMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    mcp_common::init_tracing("process_mcp", cli.verbose)?;

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    let server = ProcessMcpServer::with_config(config)?;

    tracing::info!(
        "Starting process MCP server with process: {}",
        server.gateway().config().launcher().prefix()
    );

    mcp_common::serve_stdio(server).await
}
