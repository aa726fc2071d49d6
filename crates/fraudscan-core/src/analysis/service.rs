//! Analysis service trait.

use async_trait::async_trait;

use super::model::AnalysisResponse;
use crate::error::TransportError;

/// The remote collaborator that analyzes a listing URL.
///
/// Implementations return an already validated [`AnalysisResponse`]; untyped
/// payload handling stays behind this boundary.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, url: &str) -> Result<AnalysisResponse, TransportError>;
}
