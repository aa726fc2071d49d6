//! HTTP client for the remote listing analysis service.

use std::time::Duration;

use async_trait::async_trait;
use fraudscan_core::analysis::{AnalysisResponse, AnalysisService};
use fraudscan_core::config::ClientConfig;
use fraudscan_core::error::{FraudScanError, TransportError};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::payload;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

/// `AnalysisService` over `POST <endpoint>` with a JSON `{ "url": ... }` body.
#[derive(Debug, Clone)]
pub struct AnalysisApiClient {
    client: Client,
    endpoint: String,
}

impl AnalysisApiClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FraudScanError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FraudScanError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, FraudScanError> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_request(&self, url: &str) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { url })
            .send()
            .await
            .map_err(|err| TransportError::Network {
                message: format!("request to {} failed: {err}", self.endpoint),
                is_timeout: err.is_timeout(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body_text));
        }

        response
            .json()
            .await
            .map_err(|err| TransportError::malformed(format!("response is not JSON: {err}")))
    }
}

#[async_trait]
impl AnalysisService for AnalysisApiClient {
    async fn analyze(&self, url: &str) -> Result<AnalysisResponse, TransportError> {
        tracing::info!("Analyzing {}", url);
        let body = self.send_request(url).await.inspect_err(|e| {
            tracing::warn!("Analysis of {} failed: {}", url, e);
        })?;
        payload::parse_response(body)
    }
}

fn map_http_error(status: StatusCode, body: &str) -> TransportError {
    let message = payload::error_message(body).unwrap_or_else(|| {
        format!(
            "Server error: {}",
            status.canonical_reason().unwrap_or("unexpected status")
        )
    });
    TransportError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_prefers_body_message() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"error": "Link invalid"}"#);
        assert_eq!(
            err,
            TransportError::Http {
                status: 400,
                message: "Link invalid".to_string()
            }
        );
    }

    #[test]
    fn test_map_http_error_falls_back_to_reason() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(err.user_message(), "Server error: Bad Gateway");
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:9/api/analyze".to_string(),
            ..ClientConfig::default()
        };
        let client = AnalysisApiClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/api/analyze");
    }
}
