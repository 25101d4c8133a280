//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_target;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns 307 Temporary Redirect. Original URLs stored without a scheme are
/// redirected to `https://`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the target cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let shortlink = state.shortlink_service.resolve_code(&code).await?;
    let target = redirect_target(&shortlink.original_url);

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        AppError::internal(
            "Invalid redirect target",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    debug!(code = %code, target = %target, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
