//! DTOs for link shortening endpoint.

use crate::utils::url_validator::URL_PATTERN;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/v1/shorten`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. The scheme is optional.
    #[validate(regex(path = *URL_PATTERN, message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias. Whitespace runs are replaced with `-`.
    #[serde(default)]
    pub custom_name: Option<String>,
}

/// Response body for `POST /api/v1/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: String,
    pub data: ShortenData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenData {
    /// Full public short URL, e.g. `https://shortit/aB3xYz`.
    pub short_url: String,
}
