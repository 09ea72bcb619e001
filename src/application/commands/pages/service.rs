// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::{
    application::commands::save::SaveService,
    domain::{
        page::{Page, PageRepository},
        slug::SlugConfig,
    },
};

pub struct PageCommandService {
    pub(super) repo: Arc<dyn PageRepository>,
    pub(super) saver: Arc<SaveService<Page>>,
}

impl PageCommandService {
    pub fn new(repo: Arc<dyn PageRepository>, saver: Arc<SaveService<Page>>) -> Self {
        Self { repo, saver }
    }

    pub(super) fn slug_config(&self) -> &SlugConfig {
        self.saver.assigner().config()
    }
}
