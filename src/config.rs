//! Dashboard configuration.
//!
//! Values are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. JSON file (`--config <path>`, or `<config_dir>/fraudshield/config.json` if present)
//! 3. `FRAUDSHIELD_*` environment variables
//! 4. Command-line flags
//!
//! # Example file
//!
//! ```json
//! {
//!   "display_mode": "dark",
//!   "initial_tab": "bias",
//!   "feed": { "enabled": true, "interval_ms": 1500 }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::RunOptions;
use crate::error::ConfigError;
use crate::models::{DisplayMode, Tab};

pub const ENV_DARK_MODE: &str = "FRAUDSHIELD_DARK_MODE";
pub const ENV_TAB: &str = "FRAUDSHIELD_TAB";
pub const ENV_FEED: &str = "FRAUDSHIELD_FEED";
pub const ENV_FEED_INTERVAL_MS: &str = "FRAUDSHIELD_FEED_INTERVAL_MS";
pub const ENV_LOG_FILE: &str = "FRAUDSHIELD_LOG_FILE";

/// Shortest feed interval accepted, in milliseconds
pub const MIN_FEED_INTERVAL_MS: u64 = 50;

/// Settings for the simulated live feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub enabled: bool,
    /// Time between simulated notifications
    pub interval_ms: u64,
    /// Every n-th simulated transaction is flagged
    pub flag_every: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 1500,
            flag_every: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub display_mode: DisplayMode,
    pub initial_tab: Tab,
    /// Location permission at startup
    pub location_permission: bool,
    pub feed: FeedConfig,
    /// Log file; defaults to the platform data directory
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// `<config_dir>/fraudshield/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fraudshield").join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load file and environment layers.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no layer may set, wherever they came from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.interval_ms < MIN_FEED_INTERVAL_MS {
            return Err(ConfigError::InvalidValue {
                key: "feed.interval_ms".to_string(),
                value: self.feed.interval_ms.to_string(),
                reason: format!("must be at least {}", MIN_FEED_INTERVAL_MS),
            });
        }
        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the process environment in production).
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DARK_MODE) {
            self.display_mode = DisplayMode::from_dark(parse_bool(ENV_DARK_MODE, &value)?);
        }
        if let Some(value) = lookup(ENV_TAB) {
            self.initial_tab = value.parse().map_err(|err: crate::models::UnknownTab| {
                ConfigError::InvalidValue {
                    key: ENV_TAB.to_string(),
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup(ENV_FEED) {
            self.feed.enabled = parse_bool(ENV_FEED, &value)?;
        }
        if let Some(value) = lookup(ENV_FEED_INTERVAL_MS) {
            self.feed.interval_ms = parse_interval(ENV_FEED_INTERVAL_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG_FILE) {
            self.log_file = Some(PathBuf::from(value));
        }
        Ok(())
    }

    /// Apply command-line flags, which always win.
    pub fn apply_cli(&mut self, options: &RunOptions) {
        if let Some(mode) = options.display_mode {
            self.display_mode = mode;
        }
        if let Some(tab) = options.tab {
            self.initial_tab = tab;
        }
        if let Some(enabled) = options.feed {
            self.feed.enabled = enabled;
        }
    }

    /// Where logs go: the configured file, else `<data_local_dir>/fraudshield/fraudshield.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("fraudshield").join("fraudshield.log"))
        })
    }
}

/// Accepts the usual spellings: 1/0, true/false, yes/no, on/off.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

fn parse_interval(key: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };
    let ms: u64 = value
        .trim()
        .parse()
        .map_err(|err: std::num::ParseIntError| invalid(err.to_string()))?;
    if ms < MIN_FEED_INTERVAL_MS {
        return Err(invalid(format!("must be at least {}", MIN_FEED_INTERVAL_MS)));
    }
    Ok(ms)
}
