// src/config/file.rs
// File-based configuration from ~/.reminders-mcp/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct FileConfig {
    #[serde(default)]
    pub interpreter: InterpreterSection,
    #[serde(default)]
    pub host: HostSection,
}

/// Interpreter section
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct InterpreterSection {
    /// Program used to run scripts
    pub program: Option<String>,
}

/// Host application section
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct HostSection {
    /// Application name addressed by `tell application`
    pub application: Option<String>,
}

impl FileConfig {
    /// Load config from ~/.reminders-mcp/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific path; missing or malformed files yield defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        super::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[interpreter]
program = "/usr/bin/osascript"

[host]
application = "Reminders"
"#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.interpreter.program.as_deref(), Some("/usr/bin/osascript"));
        assert_eq!(config.host.application.as_deref(), Some("Reminders"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[host]\napplication = \"Reminders Beta\"").unwrap();
        let config = FileConfig::load_from(file.path());
        assert_eq!(config.host.application.as_deref(), Some("Reminders Beta"));
        assert_eq!(config.interpreter.program, None);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[host\napplication = ").unwrap();
        assert_eq!(FileConfig::load_from(file.path()), FileConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, FileConfig::default());
    }
}
