use crate::domain::errors::DomainResult;
use crate::domain::page::entity::Page;
use crate::domain::page::value_objects::PageId;
use crate::domain::record::RecordStore;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait PageRepository: RecordStore<Page> {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    async fn delete(&self, id: PageId) -> DomainResult<()>;
}
