//! Configuration service implementation.
//!
//! Loads the client configuration from `~/.config/fraudscan/config.toml` and
//! layers environment overrides on top.

use std::fs;
use std::path::PathBuf;

use fraudscan_core::config::ClientConfig;
use fraudscan_core::error::{FraudScanError, Result};

use crate::paths::FraudScanPaths;

pub const ENV_ENDPOINT: &str = "FRAUDSCAN_ENDPOINT";
pub const ENV_HISTORY_FILE: &str = "FRAUDSCAN_HISTORY_FILE";
pub const ENV_REQUEST_TIMEOUT: &str = "FRAUDSCAN_REQUEST_TIMEOUT_SECS";

/// Reads `config.toml` and applies environment overrides.
///
/// Precedence (highest first): environment, file, built-in defaults. Command
/// line flags are applied on top by the binary.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(FraudScanPaths::config_file()?))
    }

    /// Uses a custom config path (for `--config` and tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Loads the file only. A missing file yields defaults; an unparsable one is an error.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!("No config at {}, using defaults", self.path.display());
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            FraudScanError::config(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Loads the file and applies process environment overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = self.load_file()?;
        apply_env_overrides(config, |key| std::env::var(key).ok())
    }
}

/// Applies overrides read through `lookup`. Blank values are ignored.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(endpoint) = lookup(ENV_ENDPOINT) {
        config.endpoint = endpoint;
    }
    if let Some(history_file) = lookup(ENV_HISTORY_FILE) {
        config.history_file = Some(PathBuf::from(history_file));
    }
    if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT) {
        config.request_timeout_secs = timeout.trim().parse().map_err(|_| {
            FraudScanError::config(format!(
                "{ENV_REQUEST_TIMEOUT} must be a whole number of seconds, got '{timeout}'"
            ))
        })?;
    }
    Ok(config)
}
