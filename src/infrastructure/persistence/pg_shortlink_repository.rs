//! PostgreSQL implementation of shortlink repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::shortlink::not_found;
use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
use crate::domain::repositories::ShortlinkRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str = "id, custom_name, short_url, original_url, created_at";

/// Row shape shared by every query returning a full record.
#[derive(Debug, sqlx::FromRow)]
struct ShortlinkRow {
    id: Uuid,
    custom_name: Option<String>,
    short_url: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortlinkRow> for Shortlink {
    fn from(row: ShortlinkRow) -> Self {
        Shortlink::new(
            row.id.into(),
            row.custom_name,
            row.short_url,
            row.original_url,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for shortlink storage.
///
/// Uniqueness of `short_url` and `custom_name` is enforced by the
/// `shortlinks_short_url_key` and `shortlinks_custom_name_key` constraints;
/// violations are mapped to [`AppError::Conflict`] by the `sqlx::Error`
/// conversion. Listing follows the `seq` column, i.e. insertion order.
pub struct PgShortlinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortlinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn find_one_by(&self, column: &str, value: &str) -> Result<Option<Shortlink>, AppError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM shortlinks WHERE {column} = $1 ORDER BY seq LIMIT 1"
        );

        let row = sqlx::query_as::<_, ShortlinkRow>(&query)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Shortlink::from))
    }
}

#[async_trait]
impl ShortlinkRepository for PgShortlinkRepository {
    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, AppError> {
        let row = sqlx::query_as::<_, ShortlinkRow>(
            r#"
            INSERT INTO shortlinks (id, custom_name, short_url, original_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, custom_name, short_url, original_url, created_at
            "#,
        )
        .bind(ShortlinkId::generate().as_uuid())
        .bind(new_shortlink.custom_name)
        .bind(new_shortlink.short_url)
        .bind(new_shortlink.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        let row = sqlx::query_as::<_, ShortlinkRow>(
            r#"
            SELECT id, custom_name, short_url, original_url, created_at
            FROM shortlinks
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortlink::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Shortlink>, AppError> {
        self.find_one_by("original_url", original_url).await
    }

    async fn find_by_custom_name(&self, custom_name: &str) -> Result<Option<Shortlink>, AppError> {
        self.find_one_by("custom_name", custom_name).await
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Shortlink>, AppError> {
        self.find_one_by("short_url", short_url).await
    }

    async fn list(&self) -> Result<Vec<Shortlink>, AppError> {
        let rows = sqlx::query_as::<_, ShortlinkRow>(
            r#"
            SELECT id, custom_name, short_url, original_url, created_at
            FROM shortlinks
            ORDER BY seq
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Shortlink::from).collect())
    }

    async fn update(&self, id: ShortlinkId, patch: ShortlinkPatch) -> Result<Shortlink, AppError> {
        // $2 feeds both columns: a custom name is also the short code.
        let row = sqlx::query_as::<_, ShortlinkRow>(
            r#"
            UPDATE shortlinks
            SET custom_name  = COALESCE($2, custom_name),
                short_url    = COALESCE($2, short_url),
                original_url = COALESCE($3, original_url)
            WHERE id = $1
            RETURNING id, custom_name, short_url, original_url, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.custom_name)
        .bind(patch.original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Shortlink::from).ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: ShortlinkId) -> Result<Option<Shortlink>, AppError> {
        let row = sqlx::query_as::<_, ShortlinkRow>(
            r#"
            DELETE FROM shortlinks
            WHERE id = $1
            RETURNING id, custom_name, short_url, original_url, created_at
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Shortlink::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
