use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::Slug;
use async_trait::async_trait;

/// Record-side view used while assigning a slug.
pub trait Sluggable {
    /// Primary key once the record has been persisted.
    fn record_id(&self) -> Option<i64>;
    /// Current value of the source field called `field`; `None` when the
    /// record has no such field or it is unset.
    fn source_value(&self, field: &str) -> Option<&str>;
    /// Whether the record stores its slug in a field called `field`.
    fn has_slug_field(&self, field: &str) -> bool;
    fn slug(&self) -> Option<&Slug>;
    fn set_slug(&mut self, slug: Slug);
    fn clear_slug(&mut self);
}

/// Collision probe against other records of the same type.
#[async_trait]
pub trait SiblingSlugLookup: Send + Sync {
    /// Whether a record other than `exclude_id` already uses `slug`.
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool>;
}
