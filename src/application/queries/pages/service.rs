use std::sync::Arc;

use crate::domain::page::PageRepository;

pub struct PageQueryService {
    pub(super) repo: Arc<dyn PageRepository>,
}

impl PageQueryService {
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }
}
