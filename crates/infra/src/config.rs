//! Configuration loader
//!
//! Loads the portal client configuration from environment variables or
//! files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PADRON_BASE_URL`: Portal base URL (required)
//! - `PADRON_TIMEOUT_SECONDS`: Request timeout in seconds
//! - `PADRON_MAX_ATTEMPTS`: HTTP attempts per request (initial try + retries)

use std::path::{Path, PathBuf};
use std::time::Duration;

use padron_domain::{PadronError, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.toml", "config.json", "padron.toml", "padron.json"];

/// Portal client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_attempts() -> usize {
    3
}

impl PortalConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Load configuration with automatic fallback strategy.
    ///
    /// # Errors
    /// Returns `PadronError::Config` if neither the environment nor a
    /// config file yields a usable configuration.
    pub fn load() -> Result<Self> {
        match Self::load_from_env() {
            Ok(config) => {
                tracing::info!("configuration loaded from environment variables");
                Ok(config)
            }
            Err(e) => {
                tracing::debug!(error = ?e, "environment incomplete, trying config file");
                Self::load_from_file(None)
            }
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `PadronError::Config` if `PADRON_BASE_URL` is missing or a
    /// numeric variable does not parse.
    pub fn load_from_env() -> Result<Self> {
        let base_url = std::env::var("PADRON_BASE_URL")
            .map_err(|_| PadronError::Config("PADRON_BASE_URL is not set".to_owned()))?;

        let timeout_seconds = match std::env::var("PADRON_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                PadronError::Config(format!("invalid PADRON_TIMEOUT_SECONDS: {e}"))
            })?,
            Err(_) => default_timeout_seconds(),
        };

        let max_attempts = match std::env::var("PADRON_MAX_ATTEMPTS") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|e| PadronError::Config(format!("invalid PADRON_MAX_ATTEMPTS: {e}")))?,
            Err(_) => default_max_attempts(),
        };

        Self::validate(Self { base_url, timeout_seconds, max_attempts })
    }

    /// Load configuration from a file.
    ///
    /// If `path` is `None`, probes `config.toml`, `config.json`,
    /// `padron.toml`, and `padron.json` in the current directory. Format is
    /// detected by extension.
    ///
    /// # Errors
    /// Returns `PadronError::Config` when no file is found or the contents
    /// do not parse.
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::probe_config_paths().ok_or_else(|| {
                PadronError::Config("no configuration file found".to_owned())
            })?,
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            PadronError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents).map_err(|e| {
                PadronError::Config(format!("invalid JSON in {}: {e}", path.display()))
            })?
        } else {
            toml::from_str(&contents).map_err(|e| {
                PadronError::Config(format!("invalid TOML in {}: {e}", path.display()))
            })?
        };

        tracing::info!(path = %path.display(), "configuration loaded from file");
        Self::validate(config)
    }

    fn probe_config_paths() -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.is_file())
    }

    fn validate(config: Self) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(PadronError::Config("base_url must not be empty".to_owned()));
        }
        if config.max_attempts == 0 {
            return Err(PadronError::Config("max_attempts must be at least 1".to_owned()));
        }
        // Trailing slashes would double up when paths are appended.
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(Self { base_url, ..config })
    }
}
