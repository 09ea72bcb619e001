// src/application/commands/pages/create.rs
use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::{page::Page, slug::Slug},
};

pub struct CreatePageCommand {
    pub title: String,
    pub body: String,
    /// Leave blank to have the slug generated from the title.
    pub slug: Option<String>,
}

impl CreatePageCommand {
    pub fn builder() -> CreatePageCommandBuilder {
        CreatePageCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePageCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    slug: Option<String>,
}

impl CreatePageCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn build(self) -> Result<CreatePageCommand, &'static str> {
        Ok(CreatePageCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.unwrap_or_default(),
            slug: self.slug,
        })
    }
}

impl PageCommandService {
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let CreatePageCommand { title, body, slug } = command;

        let mut page = Page::new(title, body);
        if let Some(slug) = slug.filter(|s| !s.trim().is_empty()) {
            let slug = Slug::new(slug)?;
            let config = self.slug_config();
            config.check_chars(&slug)?;
            config.check_length(slug.len())?;
            page = page.with_slug(slug);
        }

        let created = self.saver.save(page).await?;
        tracing::info!(
            id = created.id.map(i64::from),
            slug = created.slug.as_ref().map(|s| s.as_str()),
            "page created"
        );
        PageDto::try_from(created)
    }
}
