// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{pages::PageCommandService, save::SaveService},
        error::ApplicationResult,
        ports::{time::Clock, util::SlugGenerator},
        queries::pages::PageQueryService,
    },
    domain::{
        page::{Page, PageRepository},
        record::RecordStore,
        slug::{SiblingSlugLookup, SlugAssigner, SlugConfig},
        timestamps::TimestampTracker,
    },
};

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    /// Wires the page services around one repository, which doubles as the
    /// sibling lookup and the record store.
    pub fn new<S>(
        page_repo: Arc<S>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_config: SlugConfig,
        save_retries: u32,
    ) -> ApplicationResult<Self>
    where
        S: PageRepository + 'static,
    {
        let lookup: Arc<dyn SiblingSlugLookup> = page_repo.clone();
        let store: Arc<dyn RecordStore<Page>> = page_repo.clone();
        let pages: Arc<dyn PageRepository> = page_repo;

        let assigner = Arc::new(SlugAssigner::new(lookup, slugger, slug_config)?);
        let saver = Arc::new(SaveService::new(
            store,
            assigner,
            TimestampTracker::new(clock),
            save_retries,
        ));

        let page_commands = Arc::new(PageCommandService::new(Arc::clone(&pages), saver));
        let page_queries = Arc::new(PageQueryService::new(pages));

        Ok(Self {
            page_commands,
            page_queries,
        })
    }

    pub fn page_commands(&self) -> Arc<PageCommandService> {
        Arc::clone(&self.page_commands)
    }

    pub fn page_queries(&self) -> Arc<PageQueryService> {
        Arc::clone(&self.page_queries)
    }
}
