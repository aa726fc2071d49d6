//! History repository trait and an in-memory implementation.

use std::sync::Mutex;

use super::model::HistoryEntry;
use crate::error::{FraudScanError, Result};

/// Durable storage for the ordered history list.
///
/// Implementations read and replace the whole sequence; there is no
/// incremental update.
pub trait HistoryRepository: Send + Sync {
    /// Reads the persisted list, most recent first.
    ///
    /// Returns an empty list when nothing has been stored yet.
    fn load(&self) -> Result<Vec<HistoryEntry>>;

    /// Replaces the persisted list.
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;
}

/// Keeps history in process memory only. Used for ephemeral runs and tests.
#[derive(Debug, Default)]
pub struct MemoryHistoryRepository {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRepository for MemoryHistoryRepository {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| FraudScanError::internal(format!("history lock poisoned: {e}")))?;
        Ok(entries.clone())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut stored = self
            .entries
            .lock()
            .map_err(|e| FraudScanError::internal(format!("history lock poisoned: {e}")))?;
        *stored = entries.to_vec();
        Ok(())
    }
}
