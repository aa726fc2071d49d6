//! JSON-file HistoryRepository implementation.

use std::path::PathBuf;

use fraudscan_core::error::{FraudScanError, Result};
use fraudscan_core::history::{HistoryEntry, HistoryRepository};
use serde::{Deserialize, Serialize};

use crate::paths::FraudScanPaths;
use crate::storage::JsonKeyValueStore;

/// Namespace key under which the history list is stored.
pub const HISTORY_KEY: &str = "scan_history";
const HISTORY_FORMAT_VERSION: u32 = 1;

/// Versioned envelope written under [`HISTORY_KEY`].
#[derive(Debug, Serialize, Deserialize)]
struct HistoryDocument {
    version: u32,
    entries: Vec<HistoryEntry>,
}

/// Stores the scan history as one key of a JSON key-value file.
///
/// Responsibilities:
/// - encode/decode the versioned history document
/// - replace the whole list on every save
///
/// Does NOT:
/// - enforce dedup or size bounds (the core `HistoryStore` does)
/// - hide corruption (`load` reports it; `HistoryCache::open` swallows it)
pub struct JsonHistoryRepository {
    store: JsonKeyValueStore,
}

impl JsonHistoryRepository {
    /// Creates a repository at the default location (`<data dir>/history.json`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(FraudScanPaths::history_file()?))
    }

    /// Creates a repository with a custom file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            store: JsonKeyValueStore::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let Some(value) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        let document: HistoryDocument = serde_json::from_value(value)?;
        if document.version != HISTORY_FORMAT_VERSION {
            return Err(FraudScanError::Serialization {
                format: "JSON".to_string(),
                message: format!("unsupported history version {}", document.version),
            });
        }
        Ok(document.entries)
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let document = HistoryDocument {
            version: HISTORY_FORMAT_VERSION,
            entries: entries.to_vec(),
        };
        self.store.set(HISTORY_KEY, serde_json::to_value(&document)?)?;
        tracing::debug!(
            "Saved {} history entries to {}",
            entries.len(),
            self.store.path().display()
        );
        Ok(())
    }
}
