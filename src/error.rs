//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service, repository and handler layers
//! returns [`AppError`]. Handlers return it directly and rely on the
//! [`IntoResponse`] implementation to render `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Generic message returned to clients for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Response body for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed URL, too-short custom name or a malformed request body.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Custom name or short code already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Identifier is not a well-formed record id.
    #[error("{message}")]
    InvalidId { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Store or unexpected failure. Never shown to clients verbatim.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_id(raw: &str) -> Self {
        Self::InvalidId {
            message: "Invalid ID format".to_string(),
            details: json!({ "id": raw }),
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    ///
    /// Conflicts are reported as `400 Bad Request`, the same as validation
    /// failures, to keep the public contract of the shorten endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } | AppError::InvalidId { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Conflict { .. } => "conflict",
            AppError::InvalidId { .. } => "invalid_id",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::InvalidId { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Internal { message, details } => {
                tracing::error!(error = %message, details = %details, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => {
                tracing::debug!(code = other.code(), details = %other.details(), "{}", other);
                other.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            let message = match db.constraint() {
                Some("shortlinks_custom_name_key") => "Custom name already exists",
                _ => "Short URL already exists",
            };
            return AppError::conflict(message, json!({ "constraint": db.constraint() }));
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message, json!({ "fields": errors.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = AppError::bad_request(
            "Custom name must be at least 5 characters long",
            json!({}),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json,
            json!({ "error": "Custom name must be at least 5 characters long" })
        );
    }

    #[tokio::test]
    async fn test_conflict_maps_to_bad_request() {
        let response = AppError::conflict("Custom name already exists", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_id_response() {
        let response = AppError::invalid_id("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid ID format");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::not_found("URL not found", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "URL not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_message() {
        let response =
            AppError::internal("connection reset by peer", json!({ "reason": "io" })).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("URL not found", json!({ "id": "x" }));
        assert_eq!(err.to_string(), "URL not found");
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.details()["id"], "x");
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
