//! Handlers for shortlink management endpoints (list, get, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::shortlink::{MessageResponse, ShortlinkDetails, ShortlinkView};
use crate::api::dto::update_shortlink::UpdateShortlinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every shortlink in creation order.
///
/// # Endpoint
///
/// `GET /api/v1/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "customName": null,
///     "shortUrl": "https://shortit/aB3xYz",
///     "originalUrl": "https://example.com/a",
///     "createdAt": "2024-01-15T10:30:00Z"
///   }
/// ]
/// ```
///
/// An empty store yields `[]`.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortlinkView>>, AppError> {
    let service = &state.shortlink_service;
    let shortlinks = service.list_shortlinks().await?;

    Ok(Json(
        shortlinks
            .into_iter()
            .map(|link| ShortlinkView::new(link, service))
            .collect(),
    ))
}

/// Returns a single shortlink.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is malformed.
/// Returns 404 Not Found if no shortlink has this id.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortlinkView>, AppError> {
    let service = &state.shortlink_service;
    let shortlink = service.get_shortlink(&id).await?;

    Ok(Json(ShortlinkView::new(shortlink, service)))
}

/// Updates the custom name and/or original URL of a shortlink.
///
/// # Endpoint
///
/// `PUT /api/v1/urls/{id}`
///
/// # Request Body
///
/// ```json
/// {
///   "customName": "new alias",                  // optional, at least 5 characters
///   "originalUrl": "https://new-destination.com" // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed id, a short custom name, a
/// malformed URL or a custom name held by another shortlink.
/// Returns 404 Not Found if no shortlink has this id.
pub async fn update_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateShortlinkRequest>, JsonRejection>,
) -> Result<Json<MessageResponse<ShortlinkDetails>>, AppError> {
    let Json(payload) = payload?;

    let service = &state.shortlink_service;
    let shortlink = service
        .update_shortlink(&id, payload.custom_name, payload.original_url)
        .await?;

    Ok(Json(MessageResponse::new(
        "URL updated successfully",
        ShortlinkDetails::new(shortlink, service),
    )))
}

/// Permanently deletes a shortlink.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{id}`
///
/// The response carries the deleted record.
///
/// # Errors
///
/// Returns 400 Bad Request if the id is malformed.
/// Returns 404 Not Found if no shortlink has this id.
pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse<ShortlinkDetails>>, AppError> {
    let service = &state.shortlink_service;
    let shortlink = service.delete_shortlink(&id).await?;

    Ok(Json(MessageResponse::new(
        "URL deleted successfully",
        ShortlinkDetails::new(shortlink, service),
    )))
}
