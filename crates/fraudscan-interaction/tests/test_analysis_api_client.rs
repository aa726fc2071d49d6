use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use fraudscan_core::analysis::{AnalysisResponse, AnalysisService, RejectionKind};
use fraudscan_core::error::TransportError;
use fraudscan_interaction::AnalysisApiClient;
use serde_json::{Value, json};

/// Fake analysis service. The requested url decides the answer.
async fn analyze(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let url = body["url"].as_str().unwrap_or_default().to_string();

    if url.contains("rent") {
        return (
            StatusCode::OK,
            Json(json!({"error_type": "WRONG_TYPE", "message": "Only sale listings are supported"})),
        );
    }
    if url.contains("invalid") {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Link invalid"})));
    }
    if url.contains("boom") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "scraper crashed"})),
        );
    }
    if url.contains("garbled") {
        return (StatusCode::OK, Json(json!({"success": true})));
    }
    if url.contains("slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "is_fraud": 1,
            "confidence": 91,
            "ai_price": 150000,
            "message": "HIGH RISK",
            "details": {
                "Titlu": url,
                "Pret": 60000,
                "Suprafata": 50,
                "Camere": 2,
                "SellerDays": 2,
                "SellerPosts": 14,
                "Images": ["https://img/a.jpg", "https://img/b.jpg"]
            }
        })),
    )
}

async fn spawn_fake_service() -> SocketAddr {
    let app = Router::new().route("/api/analyze", post(analyze));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, timeout: Duration) -> AnalysisApiClient {
    AnalysisApiClient::new(format!("http://{addr}/api/analyze"), timeout).unwrap()
}

#[tokio::test]
async fn test_verdict_is_parsed() {
    let addr = spawn_fake_service().await;
    let response = client(addr, Duration::from_secs(5))
        .analyze("https://listing/flat-1")
        .await
        .unwrap();

    match response {
        AnalysisResponse::Verdict(result) => {
            assert!(result.is_fraud);
            assert_eq!(result.confidence, 91.0);
            assert_eq!(result.title(), "https://listing/flat-1");
            assert_eq!(result.images().len(), 2);
        }
        other => panic!("expected verdict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_type_is_rejection() {
    let addr = spawn_fake_service().await;
    let response = client(addr, Duration::from_secs(5))
        .analyze("https://listing/rent-3")
        .await
        .unwrap();

    match response {
        AnalysisResponse::Rejected(rejection) => {
            assert_eq!(rejection.kind, RejectionKind::WrongType);
            assert_eq!(rejection.message, "Only sale listings are supported");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bad_request_surfaces_server_message() {
    let addr = spawn_fake_service().await;
    let err = client(addr, Duration::from_secs(5))
        .analyze("invalid")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Http {
            status: 400,
            message: "Link invalid".to_string()
        }
    );
    assert_eq!(err.user_message(), "Link invalid");
}

#[tokio::test]
async fn test_server_error_is_http_failure() {
    let addr = spawn_fake_service().await;
    let err = client(addr, Duration::from_secs(5))
        .analyze("https://listing/boom")
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Http { status: 500, .. }));
    assert_eq!(err.user_message(), "scraper crashed");
}

#[tokio::test]
async fn test_incomplete_body_is_malformed() {
    let addr = spawn_fake_service().await;
    let err = client(addr, Duration::from_secs(5))
        .analyze("https://listing/garbled")
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_timeout_is_network_failure() {
    let addr = spawn_fake_service().await;
    let err = client(addr, Duration::from_millis(200))
        .analyze("https://listing/slow")
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Network { is_timeout: true, .. }));
}

#[tokio::test]
async fn test_unreachable_service_is_network_failure() {
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let err = client(addr, Duration::from_secs(5))
        .analyze("https://listing/flat-1")
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Network { .. }));
}
