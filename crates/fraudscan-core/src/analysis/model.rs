//! Analysis domain models.
//!
//! Typed form of what the analysis service returns. Values of these types are
//! immutable once received; sessions and history entries share them through
//! `Arc`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Listing attributes extracted by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetails {
    /// Listing headline
    pub title: String,
    /// Asking price, currency units
    pub price: f64,
    /// Surface area in square meters. Expected > 0 but not guaranteed.
    pub surface_area: f64,
    pub rooms: u32,
    /// Days since the seller account was created
    pub seller_age_days: i64,
    /// Number of currently active listings by the same seller
    pub seller_active_posts: u32,
    /// Image URLs in display order; may be empty
    #[serde(default)]
    pub images: Vec<String>,
}

/// The analysis service's verdict on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_fraud: bool,
    /// Fraud risk percentage, 0-100
    pub confidence: f64,
    /// Human-readable verdict
    pub message: String,
    /// Market price estimate, currency units
    pub ai_estimated_price: f64,
    pub details: ListingDetails,
}

impl AnalysisResult {
    pub fn images(&self) -> &[String] {
        &self.details.images
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }
}

/// Why the service declined to analyze a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum RejectionKind {
    /// The URL does not point to a supported listing type (e.g. a rental).
    #[strum(serialize = "WRONG_TYPE")]
    #[serde(rename = "WRONG_TYPE")]
    WrongType,
    /// Any other application-level rejection reported in a 2xx body.
    #[strum(serialize = "SERVER_ERROR")]
    #[serde(rename = "SERVER_ERROR")]
    ServerError,
}

/// An application-level rejection. Terminal for the attempt and kept in
/// session state for rendering, but never recorded in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRejection {
    pub kind: RejectionKind,
    pub message: String,
}

impl ScanRejection {
    pub fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn wrong_type(message: impl Into<String>) -> Self {
        Self::new(RejectionKind::WrongType, message)
    }
}

/// A successfully delivered and validated service answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResponse {
    Verdict(AnalysisResult),
    Rejected(ScanRejection),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A plausible non-fraud verdict used across the crate's tests.
    pub fn sample_result(title: &str) -> AnalysisResult {
        AnalysisResult {
            is_fraud: false,
            confidence: 12.0,
            message: "VERIFIED".to_string(),
            ai_estimated_price: 200_000.0,
            details: ListingDetails {
                title: title.to_string(),
                price: 190_000.0,
                surface_area: 80.0,
                rooms: 3,
                seller_age_days: 400,
                seller_active_posts: 2,
                images: vec![
                    "https://img.example/1.jpg".to_string(),
                    "https://img.example/2.jpg".to_string(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rejection_kind_wire_names() {
        assert_eq!(
            RejectionKind::from_str("WRONG_TYPE").unwrap(),
            RejectionKind::WrongType
        );
        assert_eq!(RejectionKind::ServerError.to_string(), "SERVER_ERROR");
        assert!(RejectionKind::from_str("SOMETHING_ELSE").is_err());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = fixtures::sample_result("Apartment");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["aiEstimatedPrice"], 200_000.0);
        assert_eq!(json["details"]["sellerAgeDays"], 400);
    }
}
