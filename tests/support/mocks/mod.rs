// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog_repo;
pub mod post_repo;
pub mod time;
pub mod user_repo;

pub use catalog_repo::{InMemoryCatalogRepo, Outage};
pub use post_repo::InMemoryPostRepo;
pub use time::{DummyClock, ManualClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
