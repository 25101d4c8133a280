//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the record store answered a ping.
    pub store_reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_error: Option<String>,
}

/// Reports whether the service can reach its record store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// **200 OK**:
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "storeReachable": true }
/// ```
///
/// **503 Service Unavailable** with `"status": "degraded"`,
/// `"storeReachable": false` and the failure in `storeError`.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let version = env!("CARGO_PKG_VERSION");

    match state.shortlink_service.check_store().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthReport {
                status: "healthy",
                version,
                store_reachable: true,
                store_error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport {
                    status: "degraded",
                    version,
                    store_reachable: false,
                    store_error: Some(e.to_string()),
                }),
            )
        }
    }
}
