pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Page;
pub use repository::PageRepository;
pub use value_objects::PageId;
