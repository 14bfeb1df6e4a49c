//! Configuration file handling
//!
//! JSON object, every key optional:
//!
//! ```text
//! {"neo_path": "data/neos.csv", "cad_path": "data/cad.json",
//!  "log_level": "warn", "default_limit": 10}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, Severity};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// NEO CSV file
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,

    /// Close approach JSON file
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,

    /// Minimum log severity: trace, info, warn, error, fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Result cap for `query` when `--limit` is not given
    #[serde(default)]
    pub default_limit: Option<usize>,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            log_level: default_log_level(),
            default_limit: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config = Self::from_json(&content)?;

        let shown = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        if self.neo_path.as_os_str().is_empty() || self.cad_path.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_path and cad_path must not be empty"));
        }

        Ok(())
    }

    /// Minimum log severity
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.severity(), Severity::Warn);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json(
            r#"{"neo_path": "n.csv", "cad_path": "c.json", "log_level": "info", "default_limit": 10}"#,
        )
        .unwrap();
        assert_eq!(config.neo_path, PathBuf::from("n.csv"));
        assert_eq!(config.cad_path, PathBuf::from("c.json"));
        assert_eq!(config.severity(), Severity::Info);
        assert_eq!(config.default_limit, Some(10));
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(err.message().contains("Invalid log_level"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_json(r#"{"neos": "x.csv"}"#).is_err());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(Config::from_json(r#"{"neo_path": ""}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/neodb.json")).unwrap_err();
        assert_eq!(err.code_str(), "NEO_CLI_CONFIG_ERROR");
    }
}
