// tests/support/mocks/page_repo.rs
use async_trait::async_trait;
use std::sync::Mutex;

use slugged::domain::errors::{DomainError, DomainResult};
use slugged::domain::page::{Page, PageId, PageRepository};
use slugged::domain::record::RecordStore;
use slugged::domain::slug::{SiblingSlugLookup, Slug};

#[derive(Default)]
struct State {
    pages: Vec<Page>,
    next_id: i64,
    writes: usize,
    lookups: usize,
}

/// In-memory page table with a unique slug column.
#[derive(Default)]
pub struct InMemoryPageRepo {
    state: Mutex<State>,
}

impl InMemoryPageRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    pub fn lookups(&self) -> usize {
        self.state.lock().unwrap().lookups
    }

    pub fn slugs(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .pages
            .iter()
            .filter_map(|p| p.slug.as_ref().map(|s| s.as_str().to_string()))
            .collect()
    }
}

#[async_trait]
impl SiblingSlugLookup for InMemoryPageRepo {
    async fn slug_exists(&self, slug: &Slug, exclude_id: Option<i64>) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.lookups += 1;
        Ok(state.pages.iter().any(|p| {
            p.slug.as_ref() == Some(slug) && p.id.map(i64::from) != exclude_id
        }))
    }
}

#[async_trait]
impl RecordStore<Page> for InMemoryPageRepo {
    async fn persist(&self, mut page: Page) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &page.slug {
            let taken = state
                .pages
                .iter()
                .any(|p| p.slug.as_ref() == Some(slug) && p.id != page.id);
            if taken {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }

        state.writes += 1;
        match page.id {
            Some(id) => {
                let slot = state
                    .pages
                    .iter_mut()
                    .find(|p| p.id == Some(id))
                    .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
                *slot = page.clone();
            }
            None => {
                state.next_id += 1;
                page.id = Some(PageId::new(state.next_id)?);
                state.pages.push(page.clone());
            }
        }
        Ok(page)
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepo {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .pages
            .iter()
            .find(|p| p.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.pages.len();
        state.pages.retain(|p| p.id != Some(id));
        if state.pages.len() == before {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }
}
