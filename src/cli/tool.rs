// src/cli/tool.rs
// Direct operation execution from CLI

use anyhow::{Context, Result};
use reminders::config::EnvConfig;
use reminders::dispatch;
use reminders::service::RemindersService;
use serde_json::Value;
use tracing::info;

fn parse_args(args: &str) -> Result<Value> {
    serde_json::from_str(args).with_context(|| format!("arguments are not valid JSON: {}", args))
}

/// Execute an operation and print the JSON result
pub async fn run_tool(config: EnvConfig, name: String, args: String) -> Result<()> {
    let service = RemindersService::from_config(&config);
    let args = parse_args(&args)?;

    let value = dispatch::dispatch(&service, &name, args)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_user_string()))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Print the shell-quoted interpreter line for an operation
pub fn run_render(config: EnvConfig, name: String, args: String) -> Result<()> {
    let service = RemindersService::from_config(&config);
    let script = dispatch::render(&service, &name, parse_args(&args)?)?;
    info!(operation = %script.operation(), "Rendered script");
    println!("{}", script.shell_line(&config.program));
    Ok(())
}
