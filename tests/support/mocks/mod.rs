// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod page_repo;
pub mod time;

pub use page_repo::InMemoryPageRepo;
pub use time::{FixedClock, SteppingClock, fixed_now};
