//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, builds the tool catalog and
//! starts the server with the configured transport.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use kotlin_senior_mcp::core::{Config, McpServer, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // A duplicate tool name aborts startup here
    let server = McpServer::new(config.clone()).context("failed to build tool catalog")?;

    server.run(config.transport).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured on top of the configured level.
/// Logs go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::from_default_env().add_directive(logging.max_level().into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
