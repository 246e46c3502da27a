// src/cli/check.rs
// Configuration report and interpreter probe

use anyhow::Result;
use reminders::bridge::Osascript;
use reminders::config::{EnvConfig, FileConfig};

pub async fn run_check(config: EnvConfig) -> Result<()> {
    println!("Config file:  {}", FileConfig::config_path().display());
    println!("Interpreter:  {}", config.program);
    println!("Application:  {}", config.application);
    println!(
        "Log level:    {}",
        config.log_level.as_deref().unwrap_or("(default)")
    );
    println!();

    let validation = config.validate();
    println!("{}", validation.report());

    if !validation.is_valid() {
        anyhow::bail!("configuration has errors");
    }

    match Osascript::new(config.program.clone()).probe().await {
        Ok(()) => println!("Interpreter probe: ok"),
        Err(e) => {
            println!("Interpreter probe: failed ({})", e.to_user_string());
            anyhow::bail!("interpreter is not usable");
        }
    }

    Ok(())
}
