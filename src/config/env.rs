// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use super::{DEFAULT_APPLICATION, DEFAULT_PROGRAM, FileConfig};
use std::path::Path;
use tracing::{Level, debug, info};

/// Outcome of `EnvConfig::validate`: errors block startup, warnings do not
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors then warnings, one bullet each; "Configuration OK" when both are empty
    pub fn report(&self) -> String {
        let sections = [("Errors", &self.errors), ("Warnings", &self.warnings)];
        let lines: Vec<String> = sections
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .flat_map(|(title, items)| {
                std::iter::once(format!("{}:", title))
                    .chain(items.iter().map(|i| format!("  - {}", i)))
            })
            .collect();
        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// Interpreter program (REMINDERS_OSASCRIPT)
    pub program: String,
    /// Host application name (REMINDERS_APP)
    pub application: String,
    /// Log level override (REMINDERS_LOG)
    pub log_level: Option<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            application: DEFAULT_APPLICATION.to_string(),
            log_level: None,
        }
    }
}

impl EnvConfig {
    /// Load all configuration (call once at startup). Env wins over the file.
    pub fn load() -> Self {
        info!("Loading environment configuration");
        Self::from_sources(read_var, FileConfig::load())
    }

    /// Resolve from an env lookup and a parsed file
    pub fn from_sources(env: impl Fn(&str) -> Option<String>, file: FileConfig) -> Self {
        let program = env("REMINDERS_OSASCRIPT")
            .or(file.interpreter.program)
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let application = env("REMINDERS_APP")
            .or(file.host.application)
            .unwrap_or_else(|| DEFAULT_APPLICATION.to_string());
        let log_level = env("REMINDERS_LOG");

        debug!(program = %program, application = %application, "Configuration resolved");

        Self {
            program,
            application,
            log_level,
        }
    }

    /// Parsed log level override, if set and recognised
    pub fn log_level(&self) -> Option<Level> {
        self.log_level.as_deref().and_then(|l| l.trim().parse().ok())
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.program.trim().is_empty() {
            errors.push("REMINDERS_OSASCRIPT is empty; no interpreter to run.".to_string());
        } else if self.program.contains('/') && !Path::new(&self.program).exists() {
            warnings.push(format!("Interpreter '{}' does not exist.", self.program));
        }

        if self.application.trim().is_empty() {
            errors.push("REMINDERS_APP is empty; scripts need a host application.".to_string());
        }

        if let Some(level) = &self.log_level
            && self.log_level().is_none()
        {
            warnings.push(format!(
                "Unknown REMINDERS_LOG '{}'. Valid options: error, warn, info, debug, trace",
                level
            ));
        }

        if !cfg!(target_os = "macos") {
            warnings.push("Not running on macOS; the host task store is unavailable.".to_string());
        }

        ConfigValidation { warnings, errors }
    }
}

/// Read a single env var, filtering empty values
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
