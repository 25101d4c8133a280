//! DTO for the shortlink update endpoint.

use serde::Deserialize;

/// Request body for `PUT /api/v1/urls/{id}`.
///
/// Both fields are optional; only provided fields are changed. Validation
/// happens in the service, after the identifier has been checked.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShortlinkRequest {
    /// New alias. Also becomes the short code.
    #[serde(default)]
    pub custom_name: Option<String>,

    /// New destination URL.
    #[serde(default)]
    pub original_url: Option<String>,
}
