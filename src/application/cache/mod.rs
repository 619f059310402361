// src/application/cache/mod.rs
mod collection;
mod registry;

pub use collection::{CollectionCache, CollectionFetcher, FetchFn, ListState};
pub use registry::{CatalogCaches, post_cache, user_cache};
