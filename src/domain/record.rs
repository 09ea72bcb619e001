// src/domain/record.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::SiblingSlugLookup;
use async_trait::async_trait;

/// Persistence write for one record type.
///
/// Inserts records without a primary key and updates the rest. A slug already
/// taken by another row surfaces as `DomainError::Conflict`.
#[async_trait]
pub trait RecordStore<R>: SiblingSlugLookup
where
    R: Send + 'static,
{
    async fn persist(&self, record: R) -> DomainResult<R>;
}
