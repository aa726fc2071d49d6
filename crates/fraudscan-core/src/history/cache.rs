//! Persistence boundary for the history snapshot.

use std::sync::Arc;

use super::model::HistoryEntry;
use super::repository::HistoryRepository;
use super::store::HistoryStore;
use crate::analysis::AnalysisResult;
use crate::error::Result;

/// The live history: current snapshot plus the repository it is mirrored to.
///
/// Every mutation computes a new [`HistoryStore`], swaps it in and writes the
/// full list through the repository before returning.
pub struct HistoryCache {
    store: HistoryStore,
    repository: Arc<dyn HistoryRepository>,
}

impl HistoryCache {
    /// Loads the persisted history.
    ///
    /// Missing or unreadable data yields an empty history; the failure is
    /// logged and never surfaced.
    pub fn open(repository: Arc<dyn HistoryRepository>) -> Self {
        let store = match repository.load() {
            Ok(entries) => HistoryStore::from_entries(entries),
            Err(e) => {
                tracing::warn!("Discarding unreadable scan history: {}", e);
                HistoryStore::new()
            }
        };
        tracing::debug!("Loaded {} history entries", store.len());
        Self { store, repository }
    }

    /// Records a fresh result under `url`.
    ///
    /// Returns `Ok(false)` without writing when the URL is already present.
    /// On a write failure the in-memory snapshot keeps the new entry and the
    /// error is returned.
    pub fn record(&mut self, url: &str, result: Arc<AnalysisResult>) -> Result<bool> {
        let (next, inserted) = self.store.record(url, result);
        if !inserted {
            tracing::debug!("History already contains {}, keeping first entry", url);
            return Ok(false);
        }
        self.store = next;
        self.persist()?;
        tracing::info!("Recorded {} in history ({} entries)", url, self.store.len());
        Ok(true)
    }

    /// Removes the entry at `index` and returns it; out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Result<Option<HistoryEntry>> {
        let Some(removed) = self.store.entry_at(index).cloned() else {
            return Ok(None);
        };
        self.store = self.store.remove(index);
        self.persist()?;
        tracing::info!("Removed {} from history", removed.url);
        Ok(Some(removed))
    }

    /// Drops every entry.
    pub fn clear(&mut self) -> Result<()> {
        self.store = HistoryStore::new();
        self.persist()
    }

    pub fn entry_at(&self, index: usize) -> Option<&HistoryEntry> {
        self.store.entry_at(index)
    }

    pub fn snapshot(&self) -> &HistoryStore {
        &self.store
    }

    fn persist(&self) -> Result<()> {
        self.repository.save(self.store.entries()).inspect_err(|e| {
            tracing::error!("Failed to persist scan history: {}", e);
        })
    }
}
