use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{Page, PageId, PageRepository};
use crate::domain::record::RecordStore;
use crate::domain::slug::{SiblingSlugLookup, Slug};
use crate::domain::timestamps::Timestamps;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const PAGE_COLUMNS: &str = "id, title, slug, body, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePageRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePageRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn insert(&self, page: Page) -> DomainResult<Page> {
        let (created_at, updated_at) = stamps(&page)?;
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "INSERT INTO pages (title, slug, body, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {PAGE_COLUMNS}"
        ))
        .bind(page.title.as_str())
        .bind(page.slug.as_ref().map(|s| s.as_str()))
        .bind(page.body.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, id: PageId, page: Page) -> DomainResult<Page> {
        let (_, updated_at) = stamps(&page)?;
        let maybe_row = sqlx::query_as::<_, PageRow>(&format!(
            "UPDATE pages SET title = ?, slug = ?, body = ?, updated_at = ? WHERE id = ? RETURNING {PAGE_COLUMNS}"
        ))
        .bind(page.title.as_str())
        .bind(page.slug.as_ref().map(|s| s.as_str()))
        .bind(page.body.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        Page::try_from(row)
    }
}

fn stamps(page: &Page) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
    match (page.timestamps.created_at, page.timestamps.updated_at) {
        (Some(created_at), Some(updated_at)) => Ok((created_at, updated_at)),
        _ => Err(DomainError::Validation(
            "page timestamps must be set before persisting".into(),
        )),
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: Option<String>,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: Some(PageId::new(row.id)?),
            title: row.title,
            slug: row.slug.map(Slug::new).transpose()?,
            body: row.body,
            timestamps: Timestamps::new(row.created_at, row.updated_at),
        })
    }
}

#[async_trait]
impl SiblingSlugLookup for SqlitePageRepository {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM pages WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug.as_str())
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }
}

#[async_trait]
impl RecordStore<Page> for SqlitePageRepository {
    async fn persist(&self, page: Page) -> DomainResult<Page> {
        match page.id {
            Some(id) => self.update(id, page).await,
            None => self.insert(page).await,
        }
    }
}

#[async_trait]
impl PageRepository for SqlitePageRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }
}
