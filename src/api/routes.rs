//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, get_url_handler, list_urls_handler, shorten_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Version 1 of the REST API, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /shorten`    - Shorten a URL (optionally with a custom name)
/// - `GET    /urls`       - List all shortlinks
/// - `GET    /urls/{id}`  - Get a single shortlink
/// - `PUT    /urls/{id}`  - Update custom name and/or original URL
/// - `DELETE /urls/{id}`  - Delete a shortlink
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{id}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
}
