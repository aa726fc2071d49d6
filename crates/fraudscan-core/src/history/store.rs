//! Pure history snapshot.
//!
//! `HistoryStore` never touches storage. `record` and `remove` return new
//! snapshots; [`super::HistoryCache`] is the single place that persists them.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::model::HistoryEntry;
use crate::analysis::AnalysisResult;

/// Maximum number of entries kept, most recent first.
pub const HISTORY_LIMIT: usize = 15;

/// An ordered, deduplicated, size-bounded list of past scans.
///
/// Invariants:
/// - at most one entry per URL
/// - at most [`HISTORY_LIMIT`] entries
/// - most-recent-first ordering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from untrusted entries (e.g. read back from disk).
    ///
    /// Later duplicates of a URL are dropped and the list is cut to the limit,
    /// so a hand-edited file cannot break the invariants.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.url.clone()))
            .take(HISTORY_LIMIT)
            .collect();
        Self { entries }
    }

    /// Records a result stamped with the current time.
    pub fn record(&self, url: &str, result: Arc<AnalysisResult>) -> (Self, bool) {
        self.record_at(url, result, Utc::now())
    }

    /// Records a result with an explicit timestamp.
    ///
    /// Returns the new snapshot and whether an entry was inserted. A URL that
    /// is already present leaves the snapshot untouched (first write wins,
    /// position kept).
    pub fn record_at(
        &self,
        url: &str,
        result: Arc<AnalysisResult>,
        scanned_at: DateTime<Utc>,
    ) -> (Self, bool) {
        if self.contains(url) {
            return (self.clone(), false);
        }

        let mut entries = Vec::with_capacity((self.entries.len() + 1).min(HISTORY_LIMIT));
        entries.push(HistoryEntry::new(url, result, scanned_at));
        entries.extend(self.entries.iter().take(HISTORY_LIMIT - 1).cloned());
        (Self { entries }, true)
    }

    /// Removes the entry at `index`; out-of-range indices are a no-op.
    pub fn remove(&self, index: usize) -> Self {
        if index >= self.entries.len() {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.remove(index);
        Self { entries }
    }

    pub fn entry_at(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry.url == url)
    }

    pub fn position(&self, url: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.url == url)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
