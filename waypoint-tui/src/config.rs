//! Configuration loading for the Waypoint TUI.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub page_size: i64,
    pub search: SearchConfig,
    pub session_path: PathBuf,
    pub log_path: PathBuf,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or WAYPOINT_TUI_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.page_size <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be > 0".to_string(),
            });
        }
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.debounce_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.search.min_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.min_chars",
                reason: "must be > 0".to_string(),
            });
        }
        if self.session_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "harbor" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'harbor' is supported".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("WAYPOINT_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
