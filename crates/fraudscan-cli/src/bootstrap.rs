//! Composition root: config, repositories and the use case.

use std::sync::Arc;

use anyhow::Result;
use fraudscan_application::ScanUseCase;
use fraudscan_core::Dashboard;
use fraudscan_core::config::ClientConfig;
use fraudscan_core::history::{HistoryCache, HistoryRepository, MemoryHistoryRepository};
use fraudscan_infrastructure::{ConfigService, JsonHistoryRepository};
use fraudscan_interaction::AnalysisApiClient;

use crate::cli::GlobalArgs;

/// Resolves the effective config: flags > environment > file > defaults.
pub fn load_config(args: &GlobalArgs) -> Result<ClientConfig> {
    let service = match &args.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new()?,
    };
    let config = service.load()?;
    tracing::debug!("Loaded config from {}", service.path().display());
    Ok(apply_flags(config, args))
}

fn apply_flags(mut config: ClientConfig, args: &GlobalArgs) -> ClientConfig {
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(history_file) = &args.history_file {
        config.history_file = Some(history_file.clone());
    }
    config
}

fn open_repository(config: &ClientConfig, ephemeral: bool) -> Result<Arc<dyn HistoryRepository>> {
    if ephemeral {
        tracing::info!("History kept in memory for this run");
        return Ok(Arc::new(MemoryHistoryRepository::new()));
    }
    let repository = match &config.history_file {
        Some(path) => JsonHistoryRepository::with_path(path.clone()),
        None => JsonHistoryRepository::new()?,
    };
    tracing::info!("History file: {}", repository.path().display());
    Ok(Arc::new(repository))
}

pub fn build_usecase(config: &ClientConfig, ephemeral: bool) -> Result<ScanUseCase> {
    let history = HistoryCache::open(open_repository(config, ephemeral)?);
    let client = AnalysisApiClient::from_config(config)?;
    tracing::info!(
        "Analysis endpoint: {} (timeout {}s)",
        client.endpoint(),
        config.request_timeout_secs
    );
    Ok(ScanUseCase::new(Dashboard::new(history), Arc::new(client)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flags_override_loaded_config() {
        let loaded = ClientConfig {
            endpoint: "http://from-env/api".to_string(),
            request_timeout_secs: 7,
            history_file: Some(PathBuf::from("/from/file.json")),
        };
        let args = GlobalArgs {
            endpoint: Some("http://from-flag/api".to_string()),
            ..GlobalArgs::default()
        };

        let config = apply_flags(loaded, &args);
        assert_eq!(config.endpoint, "http://from-flag/api");
        assert_eq!(config.request_timeout_secs, 7);
        assert_eq!(config.history_file, Some(PathBuf::from("/from/file.json")));
    }

    #[test]
    fn test_config_file_flag_is_used() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "request_timeout_secs = 3\n").unwrap();

        let args = GlobalArgs {
            config: Some(path),
            history_file: Some(temp_dir.path().join("history.json")),
            ..GlobalArgs::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(
            config.history_file,
            Some(temp_dir.path().join("history.json"))
        );
    }
}
