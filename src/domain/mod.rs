pub mod errors;
pub mod page;
pub mod record;
pub mod slug;
pub mod timestamps;
