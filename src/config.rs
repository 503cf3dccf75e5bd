//! Configuration handling for the portfolio
//!
//! Settings come from an optional JSON file in the platform config directory,
//! then environment variables override individual values.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recipient label used when none is configured
pub const DEFAULT_RECIPIENT: &str = "Sheikh Azwad Abrar Nabil";

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_ENDPOINT: &str = "EMAILJS_ENDPOINT";
pub const ENV_RECIPIENT: &str = "PORTFOLIO_RECIPIENT_NAME";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Credentials for the EmailJS relay
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RelayConfig {
    /// EmailJS service identifier
    pub service_id: Option<String>,
    /// EmailJS template identifier
    pub template_id: Option<String>,
    /// EmailJS public key
    pub public_key: Option<String>,
    /// Override for the send endpoint
    pub endpoint: Option<String>,
}

impl RelayConfig {
    /// Names of the required credentials that are not set
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// User configuration for the portfolio
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// Relay credentials
    #[serde(default)]
    pub relay: RelayConfig,
    /// Name shown as the recipient of contact messages
    pub recipient_name: Option<String>,
    /// Play the intro animation on startup
    pub show_splash: Option<bool>,
}

impl PortfolioConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "azwad", "portfolio-tui")
    }

    /// Get the default config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("portfolio-tui.log"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path is optional and falls
    /// back to defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_SERVICE_ID) {
            self.relay.service_id = Some(v);
        }
        if let Some(v) = get(ENV_TEMPLATE_ID) {
            self.relay.template_id = Some(v);
        }
        if let Some(v) = get(ENV_PUBLIC_KEY) {
            self.relay.public_key = Some(v);
        }
        if let Some(v) = get(ENV_ENDPOINT) {
            self.relay.endpoint = Some(v);
        }
        if let Some(v) = get(ENV_RECIPIENT) {
            self.recipient_name = Some(v);
        }
        self
    }

    pub fn recipient_name(&self) -> &str {
        self.recipient_name.as_deref().unwrap_or(DEFAULT_RECIPIENT)
    }

    pub fn show_splash(&self) -> bool {
        self.show_splash.unwrap_or(true)
    }
}
