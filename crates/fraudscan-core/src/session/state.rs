//! Session state types.

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::{AnalysisResult, ScanRejection};

/// What the dashboard is currently showing. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for a URL.
    #[default]
    Idle,
    /// A request for `url` is in flight.
    Loading { url: String },
    /// A verdict is displayed, either fresh or replayed from history.
    Result {
        result: Arc<AnalysisResult>,
        source_url: String,
    },
    /// The service rejected the listing.
    Error(ScanRejection),
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn result(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            Self::Result { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&ScanRejection> {
        match self {
            Self::Error(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// The URL being scanned or displayed, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Loading { url } => Some(url),
            Self::Result { source_url, .. } => Some(source_url),
            _ => None,
        }
    }
}
