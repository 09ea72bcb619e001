// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_page;

pub use error::map_sqlx;
pub use sqlite_page::SqlitePageRepository;
