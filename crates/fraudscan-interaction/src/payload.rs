//! Validation of analysis service bodies.
//!
//! The service answers with loosely typed JSON (numeric booleans, localized
//! field names). Bodies are read as [`serde_json::Value`] first and only then
//! turned into core types, so a shape mismatch surfaces as
//! [`TransportError::MalformedResponse`] instead of a panic further down.

use std::str::FromStr;

use fraudscan_core::analysis::{
    AnalysisResponse, AnalysisResult, ListingDetails, RejectionKind, ScanRejection,
};
use fraudscan_core::error::TransportError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DEFAULT_REJECTION_MESSAGE: &str = "The listing could not be analyzed";

#[derive(Debug, Deserialize)]
struct WireVerdict {
    #[serde(deserialize_with = "flag")]
    is_fraud: bool,
    confidence: f64,
    ai_price: f64,
    #[serde(default)]
    message: String,
    details: WireDetails,
}

#[derive(Debug, Deserialize)]
struct WireDetails {
    #[serde(rename = "Titlu")]
    title: String,
    #[serde(rename = "Pret")]
    price: f64,
    #[serde(rename = "Suprafata")]
    surface_area: f64,
    #[serde(rename = "Camere")]
    rooms: u32,
    #[serde(rename = "SellerDays")]
    seller_days: i64,
    #[serde(rename = "SellerPosts")]
    seller_posts: u32,
    #[serde(rename = "Images", default)]
    images: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(f64),
}

/// Accepts `true`/`false` as well as `0`/`1`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Number(value) => value != 0.0,
    })
}

impl From<WireVerdict> for AnalysisResult {
    fn from(wire: WireVerdict) -> Self {
        AnalysisResult {
            is_fraud: wire.is_fraud,
            confidence: wire.confidence,
            message: wire.message,
            ai_estimated_price: wire.ai_price,
            details: ListingDetails {
                title: wire.details.title,
                price: wire.details.price,
                surface_area: wire.details.surface_area,
                rooms: wire.details.rooms,
                seller_age_days: wire.details.seller_days.max(0),
                seller_active_posts: wire.details.seller_posts,
                images: wire.details.images,
            },
        }
    }
}

/// Turns a 2xx body into a verdict or a rejection.
pub fn parse_response(body: Value) -> Result<AnalysisResponse, TransportError> {
    if !body.is_object() {
        return Err(TransportError::malformed(format!(
            "expected a JSON object, got {body}"
        )));
    }

    if let Some(error_type) = body.get("error_type") {
        let kind = error_type
            .as_str()
            .and_then(|s| RejectionKind::from_str(s).ok())
            .unwrap_or(RejectionKind::ServerError);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_REJECTION_MESSAGE);
        tracing::debug!("Service rejected listing: {} ({})", kind, message);
        return Ok(AnalysisResponse::Rejected(ScanRejection::new(kind, message)));
    }

    let verdict: WireVerdict = serde_json::from_value(body)
        .map_err(|e| TransportError::malformed(format!("invalid verdict payload: {e}")))?;
    Ok(AnalysisResponse::Verdict(verdict.into()))
}

/// Extracts `{"error": "..."}` from a failure body, if present.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn verdict_body(is_fraud: Value) -> Value {
        json!({
            "success": true,
            "is_fraud": is_fraud,
            "confidence": 87.5,
            "ai_price": 150000,
            "message": "HIGH RISK",
            "details": {
                "Titlu": "Apartament 2 camere",
                "Pret": 60000,
                "Suprafata": 54.5,
                "Camere": 2,
                "SellerDays": 3,
                "SellerPosts": 11,
                "Images": ["https://img/1.jpg"]
            }
        })
    }

    fn unwrap_verdict(response: AnalysisResponse) -> AnalysisResult {
        match response {
            AnalysisResponse::Verdict(result) => result,
            other => panic!("expected verdict, got {other:?}"),
        }
    }

    #[test]
    fn test_numeric_flag_parses_as_fraud() {
        let result = unwrap_verdict(parse_response(verdict_body(json!(1))).unwrap());
        assert!(result.is_fraud);
        assert_eq!(result.ai_estimated_price, 150_000.0);
        assert_eq!(result.details.title, "Apartament 2 camere");
        assert_eq!(result.details.surface_area, 54.5);
        assert_eq!(result.details.seller_active_posts, 11);
        assert_eq!(result.images(), ["https://img/1.jpg".to_string()]);
    }

    #[test]
    fn test_bool_and_zero_flags() {
        assert!(unwrap_verdict(parse_response(verdict_body(json!(true))).unwrap()).is_fraud);
        assert!(!unwrap_verdict(parse_response(verdict_body(json!(0))).unwrap()).is_fraud);
    }

    #[test]
    fn test_missing_images_default_to_empty() {
        let mut body = verdict_body(json!(0));
        body["details"].as_object_mut().unwrap().remove("Images");
        let result = unwrap_verdict(parse_response(body).unwrap());
        assert!(result.images().is_empty());
    }

    #[test]
    fn test_missing_details_is_malformed() {
        let mut body = verdict_body(json!(0));
        body.as_object_mut().unwrap().remove("details");
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }

    #[test]
    fn test_mistyped_field_is_malformed() {
        let mut body = verdict_body(json!(0));
        body["confidence"] = json!("very");
        assert!(matches!(
            parse_response(body),
            Err(TransportError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(json!([1, 2])),
            Err(TransportError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_rejection() {
        let body = json!({"error_type": "WRONG_TYPE", "message": "Only sales listings"});
        let response = parse_response(body).unwrap();
        assert_eq!(
            response,
            AnalysisResponse::Rejected(ScanRejection::wrong_type("Only sales listings"))
        );
    }

    #[test]
    fn test_unknown_error_type_is_server_error() {
        let response = parse_response(json!({"error_type": "SCRAPE_FAILED"})).unwrap();
        match response {
            AnalysisResponse::Rejected(rejection) => {
                assert_eq!(rejection.kind, RejectionKind::ServerError);
                assert_eq!(rejection.message, DEFAULT_REJECTION_MESSAGE);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error": "Link invalid"}"#).as_deref(),
            Some("Link invalid")
        );
        assert_eq!(error_message(r#"{"error": "  "}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }
}
