//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortlinkService;
use crate::domain::repositories::ShortlinkRepository;

/// Application state holding the service layer.
///
/// Constructed once at startup from an explicit repository handle and cloned
/// cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub shortlink_service: Arc<ShortlinkService>,
}

impl AppState {
    /// Builds the state around a record store and the public short URL base.
    pub fn new(repository: Arc<dyn ShortlinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            shortlink_service: Arc::new(ShortlinkService::new(repository, base_url)),
        }
    }
}
