// src/cli/serve.rs
// MCP server initialization and main loop

use anyhow::Result;
use reminders::config::EnvConfig;
use reminders::mcp::RemindersServer;
use reminders::service::RemindersService;
use tracing::{info, warn};

pub async fn run_mcp_server(config: EnvConfig) -> Result<()> {
    let validation = config.validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("Invalid configuration:\n{}", validation.report());
    }

    info!(program = %config.program, application = %config.application, "Starting MCP server");
    let server = RemindersServer::new(RemindersService::from_config(&config));

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}
