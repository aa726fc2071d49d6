//! Renderable projection of the dashboard.

use serde::Serialize;

use crate::analysis::{
    AnalysisResult, AreaPrices, DerivedScores, RiskTier, area_prices, derive_scores,
};
use crate::history::{HistoryEntry, HistoryStore};
use crate::session::{ScanSession, SessionState};

/// Everything a frontend needs to draw one frame.
///
/// Built from the session and history on demand; holds no state of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewProjection {
    pub session: SessionState,
    pub history: Vec<HistoryEntry>,
    pub active_image: Option<String>,
    pub derived_scores: Option<DerivedScores>,
    pub area_prices: Option<AreaPrices>,
    pub risk_tier: Option<RiskTier>,
    /// URL of the last scan that failed in transport, offered for retry.
    pub retry_url: Option<String>,
}

impl ViewProjection {
    pub fn project(session: &ScanSession, history: &HistoryStore) -> Self {
        let result = session.state().result();
        Self {
            session: session.state().clone(),
            history: history.entries().to_vec(),
            active_image: session.active_image().map(str::to_string),
            derived_scores: result.map(|r| derive_scores(r)),
            area_prices: result.and_then(|r| area_prices(r)),
            risk_tier: result.map(|r| RiskTier::from_confidence(r.confidence)),
            retry_url: session.retry_url().map(str::to_string),
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.session.result().map(|r| r.as_ref())
    }
}
