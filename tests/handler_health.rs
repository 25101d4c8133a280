mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use shortit::domain::entities::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
use shortit::domain::repositories::ShortlinkRepository;
use shortit::error::AppError;
use shortit::state::AppState;
use std::sync::Arc;

/// Store whose every call fails, as if the database were down.
struct UnreachableRepository;

fn unreachable() -> AppError {
    AppError::internal("Database error", serde_json::json!({ "reason": "connection refused" }))
}

#[async_trait]
impl ShortlinkRepository for UnreachableRepository {
    async fn create(&self, _: NewShortlink) -> Result<Shortlink, AppError> {
        Err(unreachable())
    }
    async fn find_by_id(&self, _: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn find_by_original_url(&self, _: &str) -> Result<Option<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn find_by_custom_name(&self, _: &str) -> Result<Option<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn find_by_short_url(&self, _: &str) -> Result<Option<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn list(&self) -> Result<Vec<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn update(&self, _: ShortlinkId, _: ShortlinkPatch) -> Result<Shortlink, AppError> {
        Err(unreachable())
    }
    async fn delete(&self, _: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        Err(unreachable())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable())
    }
}

fn unreachable_state() -> AppState {
    AppState::new(Arc::new(UnreachableRepository), common::BASE_URL)
}

#[tokio::test]
async fn test_health_ok() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storeReachable"], true);
    assert!(body.get("storeError").is_none());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_store_down() {
    let server = common::make_server(unreachable_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["storeReachable"], false);
    assert!(body["storeError"].is_string());
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let server = common::make_server(unreachable_state());

    let response = server.get("/api/v1/urls").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "error": "Internal Server Error" })
    );
}
