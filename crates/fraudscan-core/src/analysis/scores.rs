//! Locally derived risk indicators.
//!
//! Everything here is a pure function of an [`AnalysisResult`]; nothing is
//! persisted, values are recomputed whenever a view is built.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::model::AnalysisResult;

/// Asking price below this share of the estimate counts as suspiciously cheap.
const CHEAP_PRICE_RATIO: f64 = 0.6;

/// Three 0-100 sub-scores shown next to the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedScores {
    /// Either 30 (suspiciously cheap) or 95.
    pub price_score: u8,
    /// Seller-trust bucket: 40, 80 or 98.
    pub seller_score: u8,
    /// Inverse of the reported fraud confidence, unrounded.
    pub trust_score: f64,
}

/// Computes the sub-scores for a result.
pub fn derive_scores(result: &AnalysisResult) -> DerivedScores {
    DerivedScores {
        price_score: price_score(result.details.price, result.ai_estimated_price),
        seller_score: seller_score(result.details.seller_age_days),
        trust_score: trust_score(result.confidence),
    }
}

fn price_score(price: f64, estimate: f64) -> u8 {
    if price < estimate * CHEAP_PRICE_RATIO {
        30
    } else {
        95
    }
}

fn seller_score(seller_age_days: i64) -> u8 {
    if seller_age_days > 365 {
        98
    } else if seller_age_days > 30 {
        80
    } else {
        40
    }
}

fn trust_score(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    (100.0 - confidence).clamp(0.0, 100.0)
}

/// Per-square-meter figures for the price comparison card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPrices {
    pub price_per_area: f64,
    pub estimate_per_area: f64,
}

/// Returns `None` when the surface area is unknown (zero, negative or not finite).
pub fn area_prices(result: &AnalysisResult) -> Option<AreaPrices> {
    let area = result.details.surface_area;
    if !area.is_finite() || area <= 0.0 {
        return None;
    }
    Some(AreaPrices {
        price_per_area: result.details.price / area,
        estimate_per_area: result.ai_estimated_price / area,
    })
}

/// Coarse risk level that selects which safety advice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RiskTier {
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "low")]
    Low,
}

impl RiskTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 50.0 {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Safety recommendations for a buyer at this risk level.
    pub fn advice(&self) -> &'static [&'static str] {
        match self {
            Self::High => &[
                "Do not send any advance payment by bank transfer.",
                "Ask for a video call from inside the property.",
                "Reverse-search the listing photos.",
                "Ask why the price is so low.",
            ],
            Self::Low => &[
                "Request the land-registry extract.",
                "Schedule a physical viewing.",
                "Check the plumbing and installations.",
                "Negotiate the final price.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::fixtures::sample_result;

    fn with_prices(price: f64, estimate: f64) -> AnalysisResult {
        let mut result = sample_result("Flat");
        result.details.price = price;
        result.ai_estimated_price = estimate;
        result
    }

    fn with_seller_age(days: i64) -> AnalysisResult {
        let mut result = sample_result("Flat");
        result.details.seller_age_days = days;
        result
    }

    #[test]
    fn test_price_score_is_binary() {
        assert_eq!(derive_scores(&with_prices(100_000.0, 200_000.0)).price_score, 30);
        assert_eq!(derive_scores(&with_prices(190_000.0, 200_000.0)).price_score, 95);
        // exactly 60% is not below the threshold
        assert_eq!(derive_scores(&with_prices(120_000.0, 200_000.0)).price_score, 95);
    }

    #[test]
    fn test_seller_score_buckets() {
        assert_eq!(derive_scores(&with_seller_age(400)).seller_score, 98);
        assert_eq!(derive_scores(&with_seller_age(100)).seller_score, 80);
        assert_eq!(derive_scores(&with_seller_age(5)).seller_score, 40);
        assert_eq!(derive_scores(&with_seller_age(365)).seller_score, 80);
        assert_eq!(derive_scores(&with_seller_age(30)).seller_score, 40);
    }

    #[test]
    fn test_trust_score_inverts_confidence() {
        let mut result = sample_result("Flat");
        result.confidence = 85.0;
        assert_eq!(derive_scores(&result).trust_score, 15.0);
        result.confidence = 99.0;
        assert_eq!(derive_scores(&result).trust_score, 1.0);
        result.confidence = 0.0;
        assert_eq!(derive_scores(&result).trust_score, 100.0);
        result.confidence = 130.0;
        assert_eq!(derive_scores(&result).trust_score, 0.0);
    }

    #[test]
    fn test_trust_score_keeps_fractional_confidence() {
        let mut result = sample_result("Flat");
        result.confidence = 87.35;
        let trust = derive_scores(&result).trust_score;
        assert!((trust - 12.65).abs() < 1e-9, "got {trust}");
    }

    #[test]
    fn test_scores_are_deterministic() {
        let result = sample_result("Flat");
        assert_eq!(derive_scores(&result), derive_scores(&result.clone()));
    }

    #[test]
    fn test_area_prices() {
        let result = sample_result("Flat");
        let prices = area_prices(&result).unwrap();
        assert_eq!(prices.price_per_area, 190_000.0 / 80.0);
        assert_eq!(prices.estimate_per_area, 200_000.0 / 80.0);
    }

    #[test]
    fn test_area_prices_unknown_surface() {
        let mut result = sample_result("Flat");
        result.details.surface_area = 0.0;
        assert!(area_prices(&result).is_none());
        result.details.surface_area = f64::NAN;
        assert!(area_prices(&result).is_none());
    }

    #[test]
    fn test_risk_tier() {
        assert_eq!(RiskTier::from_confidence(85.0), RiskTier::High);
        assert_eq!(RiskTier::from_confidence(50.0), RiskTier::Low);
        assert_eq!(RiskTier::High.advice().len(), 4);
        assert_eq!(RiskTier::Low.to_string(), "low");
    }
}
