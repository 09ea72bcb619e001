pub mod pages;
pub mod save;

pub use save::SaveService;
