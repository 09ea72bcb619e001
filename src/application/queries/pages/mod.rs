mod get_by_id;
mod get_by_slug;
mod service;

pub use get_by_id::GetPageByIdQuery;
pub use get_by_slug::GetPageBySlugQuery;
pub use service::PageQueryService;
