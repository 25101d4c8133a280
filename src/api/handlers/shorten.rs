//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenData, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for an original URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "customName": "my cool link"   // optional
/// }
/// ```
///
/// # Response
///
/// **201 Created** when a new record was stored:
///
/// ```json
/// {
///   "message": "URL shortened successfully",
///   "data": { "shortUrl": "https://shortit/my-cool-link" }
/// }
/// ```
///
/// **200 OK** with message `Short URL already exists` when the URL was
/// already shortened; `data.shortUrl` is the existing short URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or the custom name is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let service = &state.shortlink_service;
    let outcome = service
        .create_shortlink(payload.url, payload.custom_name)
        .await?;

    let (status, message) = if outcome.is_created() {
        (StatusCode::CREATED, "URL shortened successfully")
    } else {
        (StatusCode::OK, "Short URL already exists")
    };

    Ok((
        status,
        Json(ShortenResponse {
            message: message.to_string(),
            data: ShortenData {
                short_url: service.short_url(&outcome.shortlink().short_url),
            },
        }),
    ))
}
