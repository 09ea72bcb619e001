pub mod config;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use config::SlugConfig;
pub use repository::{SiblingSlugLookup, Sluggable};
pub use services::SlugAssigner;
pub use value_objects::Slug;
