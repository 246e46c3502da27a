// src/main.rs
// reminders-mcp - MCP server for the host task store

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use reminders::config::{EnvConfig, config_dir};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then project - project overrides)
    let _ = dotenvy::from_path(config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = EnvConfig::load();

    // Set up logging based on command
    let default_level = match &cli.command {
        Some(Commands::Serve) | None => Level::WARN, // Quiet for MCP stdio
        Some(Commands::Tool { .. }) | Some(Commands::Render { .. }) | Some(Commands::Check) => {
            Level::INFO
        }
    };
    let log_level = config.log_level().unwrap_or(default_level);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::run_mcp_server(config).await?;
        }
        Some(Commands::Tool { name, args }) => {
            cli::run_tool(config, name, args).await?;
        }
        Some(Commands::Render { name, args }) => {
            cli::run_render(config, name, args)?;
        }
        Some(Commands::Check) => {
            cli::run_check(config).await?;
        }
    }

    Ok(())
}
