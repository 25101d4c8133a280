//! Repository trait for shortlink data access.

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Record store for shortlinks.
///
/// Implementations must enforce two independent uniqueness constraints:
/// `short_url` is unique across all records, and `custom_name` is unique
/// among records that have one (records without a custom name never
/// collide). Violations surface as [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortlinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortlinkRepository`] - process memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkRepository: Send + Sync {
    /// Inserts a new shortlink, assigning its id and creation time.
    ///
    /// The uniqueness check and the insert are atomic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code or custom name is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, AppError>;

    async fn find_by_id(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError>;

    /// Finds the first shortlink pointing at exactly this original URL.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<Shortlink>, AppError>;

    async fn find_by_custom_name(&self, custom_name: &str) -> Result<Option<Shortlink>, AppError>;

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Shortlink>, AppError>;

    /// Lists every shortlink in creation order.
    async fn list(&self) -> Result<Vec<Shortlink>, AppError>;

    /// Applies a partial update and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Conflict`] if the new custom name is taken.
    async fn update(&self, id: ShortlinkId, patch: ShortlinkPatch) -> Result<Shortlink, AppError>;

    /// Permanently removes a shortlink.
    ///
    /// Returns the removed record, or `Ok(None)` if no record has this id.
    async fn delete(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
