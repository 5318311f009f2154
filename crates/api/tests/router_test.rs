//! Router-level tests for public endpoints and the auth boundary.
//!
//! These run against the assembled router with a disconnected database; no
//! handler under test touches the pool.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use bazaar_api::{AppState, create_router};
use bazaar_shared::{JwtConfig, JwtService};

fn test_state() -> AppState {
    AppState {
        db: Arc::new(DatabaseConnection::default()),
        jwt_service: Arc::new(JwtService::new(JwtConfig {
            secret: "router-test-secret".to_string(),
            access_token_expires_secs: 900,
        })),
    }
}

#[tokio::test]
async fn test_health_is_public() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/wallets/USD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "missing_token");
}

#[tokio::test]
async fn test_protected_route_rejects_garbage_token() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/wallets/USD")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "invalid_token");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = create_router(test_state());

    let other = JwtService::new(JwtConfig {
        secret: "a-different-secret".to_string(),
        access_token_expires_secs: 900,
    });
    let token = other
        .generate_access_token(uuid::Uuid::new_v4(), "Intruder")
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/wallets/USD")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
