//! Unified path management for fraudscan files.
//!
//! ```text
//! ~/.config/fraudscan/         # Config directory
//! └── config.toml              # Client configuration
//!
//! ~/.local/share/fraudscan/    # Data directory
//! ├── history.json             # Persisted scan history (key-value file)
//! └── logs/                    # Application logs
//!     └── fraudscan.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "fraudscan";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for fraudscan_core::FraudScanError {
    fn from(err: PathError) -> Self {
        fraudscan_core::FraudScanError::config(err.to_string())
    }
}

/// Resolves platform directories (XDG on Linux, the native equivalents elsewhere).
pub struct FraudScanPaths;

impl FraudScanPaths {
    /// Returns the configuration directory (e.g. `~/.config/fraudscan/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g. `~/.local/share/fraudscan/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("history.json"))
    }

    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_app_dirs() {
        // Home may be missing in sandboxed CI; only check shape when it resolves.
        if let (Ok(config_dir), Ok(config_file)) =
            (FraudScanPaths::config_dir(), FraudScanPaths::config_file())
        {
            assert!(config_dir.ends_with(APP_DIR));
            assert_eq!(config_file.parent(), Some(config_dir.as_path()));
        }
        if let Ok(history) = FraudScanPaths::history_file() {
            assert!(history.ends_with("fraudscan/history.json"));
        }
    }
}
