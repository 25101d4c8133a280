//! In-memory implementation of shortlink repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::shortlink::not_found;
use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
use crate::domain::repositories::ShortlinkRepository;
use crate::error::AppError;

/// Process-local shortlink store.
///
/// Records live in a `Vec` kept in insertion order behind a single
/// `RwLock`. Uniqueness checks and writes happen under the same write guard,
/// which gives the store atomic insert-if-absent semantics. Contents are lost
/// on restart.
#[derive(Debug, Default)]
pub struct InMemoryShortlinkRepository {
    records: RwLock<Vec<Shortlink>>,
}

impl InMemoryShortlinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_first(
        &self,
        predicate: impl Fn(&Shortlink) -> bool,
    ) -> Result<Option<Shortlink>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| predicate(r)).cloned())
    }
}

/// Fails if a record other than `owner` already holds `short_url` or `custom_name`.
fn check_unique(
    records: &[Shortlink],
    owner: Option<ShortlinkId>,
    short_url: &str,
    custom_name: Option<&str>,
) -> Result<(), AppError> {
    let others = || records.iter().filter(move |r| Some(r.id) != owner);

    if let Some(name) = custom_name
        && others().any(|r| r.custom_name.as_deref() == Some(name))
    {
        return Err(AppError::conflict(
            "Custom name already exists",
            json!({ "custom_name": name }),
        ));
    }

    if others().any(|r| r.short_url == short_url) {
        return Err(AppError::conflict(
            "Short URL already exists",
            json!({ "short_url": short_url }),
        ));
    }

    Ok(())
}

#[async_trait]
impl ShortlinkRepository for InMemoryShortlinkRepository {
    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, AppError> {
        let mut records = self.records.write().await;

        check_unique(
            &records,
            None,
            &new_shortlink.short_url,
            new_shortlink.custom_name.as_deref(),
        )?;

        let shortlink = Shortlink::new(
            ShortlinkId::generate(),
            new_shortlink.custom_name,
            new_shortlink.short_url,
            new_shortlink.original_url,
            Utc::now(),
        );
        records.push(shortlink.clone());

        Ok(shortlink)
    }

    async fn find_by_id(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        self.find_first(|r| r.id == id).await
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Shortlink>, AppError> {
        self.find_first(|r| r.original_url == original_url).await
    }

    async fn find_by_custom_name(&self, custom_name: &str) -> Result<Option<Shortlink>, AppError> {
        self.find_first(|r| r.custom_name.as_deref() == Some(custom_name))
            .await
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Shortlink>, AppError> {
        self.find_first(|r| r.short_url == short_url).await
    }

    async fn list(&self) -> Result<Vec<Shortlink>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn update(&self, id: ShortlinkId, patch: ShortlinkPatch) -> Result<Shortlink, AppError> {
        let mut records = self.records.write().await;

        if let Some(name) = patch.custom_name.as_deref() {
            check_unique(&records, Some(id), name, Some(name))?;
        }

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;

        patch.apply(record);

        Ok(record.clone())
    }

    async fn delete(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        let mut records = self.records.write().await;

        Ok(records
            .iter()
            .position(|r| r.id == id)
            .map(|index| records.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
