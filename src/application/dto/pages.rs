use crate::application::error::ApplicationError;
use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Page> for PageDto {
    type Error = ApplicationError;

    fn try_from(page: Page) -> Result<Self, Self::Error> {
        let unsaved = || ApplicationError::infrastructure("page has not been persisted");
        Ok(Self {
            id: page.id.ok_or_else(unsaved)?.into(),
            title: page.title,
            slug: page.slug.ok_or_else(unsaved)?.into_inner(),
            body: page.body,
            created_at: page.timestamps.created_at.ok_or_else(unsaved)?,
            updated_at: page.timestamps.updated_at.ok_or_else(unsaved)?,
        })
    }
}
