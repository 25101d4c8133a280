//! Shortlink entity representing a shortened URL record.

use chrono::{DateTime, Utc};
use serde_json::json;
use std::fmt;
use uuid::Uuid;

use crate::error::AppError;

/// Opaque identifier of a stored shortlink.
///
/// Assigned by the store on creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortlinkId(Uuid);

impl ShortlinkId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier received from a client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidId`] if `raw` is not a well-formed UUID.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AppError::invalid_id(raw))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ShortlinkId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ShortlinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A stored shortlink.
///
/// `short_url` holds the bare short code: either the formatted custom name or
/// a generated code. The public short URL is rendered by prefixing the
/// configured base URL, see
/// [`crate::application::services::ShortlinkService::short_url`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shortlink {
    pub id: ShortlinkId,
    pub custom_name: Option<String>,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Shortlink {
    pub fn new(
        id: ShortlinkId,
        custom_name: Option<String>,
        short_url: String,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            custom_name,
            short_url,
            original_url,
            created_at,
        }
    }

    /// Returns true if the short code was chosen by the user.
    pub fn has_custom_name(&self) -> bool {
        self.custom_name.is_some()
    }
}

/// Input data for creating a new shortlink.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortlink {
    pub custom_name: Option<String>,
    pub short_url: String,
    pub original_url: String,
}

impl NewShortlink {
    /// Shortlink keyed by a generated code.
    pub fn generated(code: String, original_url: String) -> Self {
        Self {
            custom_name: None,
            short_url: code,
            original_url,
        }
    }

    /// Shortlink keyed by an already formatted custom name.
    pub fn with_custom_name(custom_name: String, original_url: String) -> Self {
        Self {
            short_url: custom_name.clone(),
            custom_name: Some(custom_name),
            original_url,
        }
    }
}

/// Partial update for an existing shortlink.
///
/// `None` fields are left unchanged. Setting `custom_name` also replaces the
/// short code, so both fields always move together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortlinkPatch {
    pub custom_name: Option<String>,
    pub original_url: Option<String>,
}

impl ShortlinkPatch {
    pub fn is_empty(&self) -> bool {
        self.custom_name.is_none() && self.original_url.is_none()
    }

    /// Applies the patch to a record in place.
    pub fn apply(self, shortlink: &mut Shortlink) {
        if let Some(name) = self.custom_name {
            shortlink.short_url = name.clone();
            shortlink.custom_name = Some(name);
        }
        if let Some(url) = self.original_url {
            shortlink.original_url = url;
        }
    }
}

pub(crate) fn not_found(id: ShortlinkId) -> AppError {
    AppError::not_found("URL not found", json!({ "id": id.to_string() }))
}
