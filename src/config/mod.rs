// src/config/mod.rs
// Configuration: environment variables layered over ~/.reminders-mcp/config.toml

pub mod env;
pub mod file;

pub use env::{ConfigValidation, EnvConfig};
pub use file::FileConfig;

use std::path::PathBuf;

/// Default interpreter program
pub const DEFAULT_PROGRAM: &str = "osascript";
/// Default host application addressed by scripts
pub const DEFAULT_APPLICATION: &str = "Reminders";

/// Per-user configuration directory (~/.reminders-mcp)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reminders-mcp")
}
