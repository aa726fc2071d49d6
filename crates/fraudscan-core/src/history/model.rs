//! History entry model.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;

/// A cached record of a past scan, keyed by listing URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Listing URL, unique within a history snapshot
    pub url: String,
    pub title: String,
    pub is_fraud: bool,
    pub scanned_at: DateTime<Utc>,
    /// Shared with any session that replays this entry
    pub result: Arc<AnalysisResult>,
}

impl HistoryEntry {
    /// Builds an entry from a fresh result, stamped with the given time.
    pub fn new(
        url: impl Into<String>,
        result: Arc<AnalysisResult>,
        scanned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.into(),
            title: result.details.title.clone(),
            is_fraud: result.is_fraud,
            scanned_at,
            result,
        }
    }
}
