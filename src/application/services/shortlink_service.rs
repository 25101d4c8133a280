//! Shortlink creation, retrieval, update and deletion service.

use std::sync::Arc;

use crate::domain::entities::shortlink::not_found;
use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
use crate::domain::repositories::ShortlinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    format_custom_name, generate_code, validate_custom_name_length, validate_custom_name_route,
};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Upper bound on insert attempts with freshly generated codes.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenOutcome {
    /// A new record was stored.
    Created(Shortlink),
    /// The original URL was already shortened; nothing was stored.
    Existing(Shortlink),
}

impl ShortenOutcome {
    pub fn shortlink(&self) -> &Shortlink {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }

    pub fn into_shortlink(self) -> Shortlink {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and managing shortlinks.
///
/// Validates input, allocates or accepts short codes and enforces the
/// uniqueness of custom names before handing records to the store. The store
/// has the final say on uniqueness; if a concurrent request wins the race,
/// the store's conflict is returned unchanged.
pub struct ShortlinkService {
    repository: Arc<dyn ShortlinkRepository>,
    base_url: String,
}

impl ShortlinkService {
    /// Creates a new shortlink service.
    ///
    /// `base_url` is the prefix of every public short URL, e.g.
    /// `https://shortit`. A trailing slash is ignored.
    pub fn new(repository: Arc<dyn ShortlinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Renders the public short URL for a short code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Shortens an original URL.
    ///
    /// # Deduplication
    ///
    /// If a record with exactly this original URL exists, it is returned as
    /// [`ShortenOutcome::Existing`] and `custom_name` is ignored.
    ///
    /// # Code Allocation
    ///
    /// - A non-empty `custom_name` has whitespace runs replaced with `-` and
    ///   becomes the short code
    /// - Otherwise a random 6-character alphanumeric code is generated; if the
    ///   store reports a collision a new code is drawn, up to
    ///   [`MAX_CODE_ATTEMPTS`] times
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or the custom
    /// name cannot be served as a short code (see
    /// [`validate_custom_name_route`]).
    /// Returns [`AppError::Conflict`] if the custom name is taken.
    /// Returns [`AppError::Internal`] if no free code was found or the store fails.
    pub async fn create_shortlink(
        &self,
        original_url: String,
        custom_name: Option<String>,
    ) -> Result<ShortenOutcome, AppError> {
        validate_url(&original_url)?;

        if let Some(existing) = self
            .repository
            .find_by_original_url(&original_url)
            .await?
        {
            tracing::debug!(id = %existing.id, "Original URL already shortened");
            return Ok(ShortenOutcome::Existing(existing));
        }

        let shortlink = match custom_name.filter(|name| !name.is_empty()) {
            Some(name) => {
                let formatted = format_custom_name(&name);
                validate_custom_name_route(&formatted)?;
                self.ensure_custom_name_available(&formatted, None)
                    .await?;

                self.repository
                    .create(NewShortlink::with_custom_name(formatted, original_url))
                    .await?
            }
            None => self.create_with_generated_code(original_url).await?,
        };

        tracing::info!(
            id = %shortlink.id,
            short_url = %shortlink.short_url,
            custom = shortlink.has_custom_name(),
            "Shortlink created"
        );

        Ok(ShortenOutcome::Created(shortlink))
    }

    /// Returns every shortlink in creation order.
    pub async fn list_shortlinks(&self) -> Result<Vec<Shortlink>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a shortlink by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidId`] if `raw_id` is malformed.
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn get_shortlink(&self, raw_id: &str) -> Result<Shortlink, AppError> {
        let id = ShortlinkId::parse(raw_id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Updates the custom name and/or original URL of a shortlink.
    ///
    /// All input is validated before anything is written, so a rejected
    /// update leaves the record unchanged. A new custom name also becomes the
    /// record's short code. Empty strings count as omitted; omitting both
    /// fields returns the record as is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidId`] / [`AppError::NotFound`] for bad ids.
    /// Returns [`AppError::Validation`] if the custom name is shorter than 5
    /// characters or cannot be served as a short code, or the URL is malformed.
    /// Returns [`AppError::Conflict`] if another record holds the custom name.
    pub async fn update_shortlink(
        &self,
        raw_id: &str,
        custom_name: Option<String>,
        original_url: Option<String>,
    ) -> Result<Shortlink, AppError> {
        let id = ShortlinkId::parse(raw_id)?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let custom_name = custom_name.filter(|name| !name.is_empty());
        let original_url = original_url.filter(|url| !url.is_empty());

        let custom_name = match custom_name {
            Some(name) => {
                validate_custom_name_length(&name)?;
                let formatted = format_custom_name(&name);
                validate_custom_name_route(&formatted)?;
                self.ensure_custom_name_available(&formatted, Some(id))
                    .await?;
                Some(formatted)
            }
            None => None,
        };

        if let Some(url) = &original_url {
            validate_url(url)?;
        }

        let patch = ShortlinkPatch {
            custom_name,
            original_url,
        };

        if patch.is_empty() {
            return Ok(current);
        }

        let updated = self.repository.update(id, patch).await?;
        tracing::info!(id = %updated.id, short_url = %updated.short_url, "Shortlink updated");

        Ok(updated)
    }

    /// Permanently deletes a shortlink and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidId`] / [`AppError::NotFound`] for bad ids.
    pub async fn delete_shortlink(&self, raw_id: &str) -> Result<Shortlink, AppError> {
        let id = ShortlinkId::parse(raw_id)?;

        let deleted = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(id = %deleted.id, short_url = %deleted.short_url, "Shortlink deleted");

        Ok(deleted)
    }

    /// Resolves a short code to its shortlink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record uses this code.
    pub async fn resolve_code(&self, code: &str) -> Result<Shortlink, AppError> {
        self.repository
            .find_by_short_url(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Checks that the record store is reachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Fails with a conflict if a record other than `owner` uses `name`
    /// either as its custom name or as its short code.
    async fn ensure_custom_name_available(
        &self,
        name: &str,
        owner: Option<ShortlinkId>,
    ) -> Result<(), AppError> {
        let taken_by_other = |holder: &Shortlink| Some(holder.id) != owner;

        let by_name = self.repository.find_by_custom_name(name).await?;
        let taken = match by_name {
            Some(holder) if taken_by_other(&holder) => true,
            _ => self
                .repository
                .find_by_short_url(name)
                .await?
                .is_some_and(|holder| taken_by_other(&holder)),
        };

        if taken {
            return Err(AppError::conflict(
                "Custom name already exists",
                json!({ "custom_name": name }),
            ));
        }

        Ok(())
    }

    /// Inserts a record under a random code, drawing a new code whenever the
    /// store reports a collision.
    async fn create_with_generated_code(&self, original_url: String) -> Result<Shortlink, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_shortlink = NewShortlink::generated(generate_code(), original_url.clone());

            match self.repository.create(new_shortlink).await {
                Ok(shortlink) => return Ok(shortlink),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Generated short code already taken, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
