use super::PageCommandService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::PageId,
};

/// Changes page content. An existing slug is kept even when the title changes.
pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PageCommandService {
    pub async fn update_page(&self, command: UpdatePageCommand) -> ApplicationResult<PageDto> {
        let id = PageId::new(command.id)?;
        let mut page = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        if let Some(title) = command.title {
            page.title = title;
        }
        if let Some(body) = command.body {
            page.body = body;
        }

        let updated = self.saver.save(page).await?;
        PageDto::try_from(updated)
    }
}
