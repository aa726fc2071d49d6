//! Analysis domain module.
//!
//! - `model`: typed service answers (`AnalysisResult`, `ScanRejection`)
//! - `scores`: locally derived indicators (`DerivedScores`, `AreaPrices`, `RiskTier`)
//! - `service`: the `AnalysisService` seam to the remote collaborator

mod model;
mod scores;
mod service;

pub use model::{AnalysisResponse, AnalysisResult, ListingDetails, RejectionKind, ScanRejection};
pub use scores::{AreaPrices, DerivedScores, RiskTier, area_prices, derive_scores};
pub use service::AnalysisService;

#[cfg(test)]
pub(crate) use model::fixtures;
