// src/domain/page/entity.rs
use crate::domain::page::value_objects::PageId;
use crate::domain::slug::{Slug, SlugConfig, Sluggable};
use crate::domain::timestamps::{Timestamped, Timestamps};

/// Content page addressed by its slug.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: Option<PageId>,
    pub title: String,
    pub slug: Option<Slug>,
    pub body: String,
    pub timestamps: Timestamps,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            slug: None,
            body: body.into(),
            timestamps: Timestamps::default(),
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    /// Slug settings for pages; the slug column is `VARCHAR(200)`.
    pub fn slug_config() -> SlugConfig {
        SlugConfig::default()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Sluggable for Page {
    fn record_id(&self) -> Option<i64> {
        self.id.map(i64::from)
    }

    fn source_value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "title" => self.title.as_str(),
            "body" => self.body.as_str(),
            _ => return None,
        };
        Some(value).filter(|v| !v.trim().is_empty())
    }

    fn has_slug_field(&self, field: &str) -> bool {
        field == "slug"
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn set_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }

    fn clear_slug(&mut self) {
        self.slug = None;
    }
}

impl Timestamped for Page {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}
