//! Response representations of a stored shortlink.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ShortlinkService;
use crate::domain::entities::Shortlink;

/// Public view of a shortlink, without its identifier.
///
/// Returned by `GET /api/v1/urls` and `GET /api/v1/urls/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlinkView {
    pub custom_name: Option<String>,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortlinkView {
    pub fn new(shortlink: Shortlink, service: &ShortlinkService) -> Self {
        Self {
            short_url: service.short_url(&shortlink.short_url),
            custom_name: shortlink.custom_name,
            original_url: shortlink.original_url,
            created_at: shortlink.created_at,
        }
    }
}

/// Full representation of a shortlink including its identifier.
///
/// Returned after update and delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlinkDetails {
    pub id: String,
    pub custom_name: Option<String>,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortlinkDetails {
    pub fn new(shortlink: Shortlink, service: &ShortlinkService) -> Self {
        Self {
            id: shortlink.id.to_string(),
            short_url: service.short_url(&shortlink.short_url),
            custom_name: shortlink.custom_name,
            original_url: shortlink.original_url,
            created_at: shortlink.created_at,
        }
    }
}

/// `{ "message": ..., "data": ... }` envelope used by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
