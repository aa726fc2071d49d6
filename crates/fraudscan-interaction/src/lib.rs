//! Remote collaborators of the dashboard.
//!
//! Currently a single one: the listing analysis service, reached over HTTP.

pub mod analysis_api_client;
pub mod payload;

pub use analysis_api_client::AnalysisApiClient;
