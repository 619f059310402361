// src/application/commands/catalog/service.rs
use std::sync::Arc;

use crate::{
    application::cache::CatalogCaches,
    domain::{catalog::CatalogRepository, slug::SlugService},
};

pub struct CatalogCommandService {
    pub(super) repo: Arc<dyn CatalogRepository>,
    pub(super) caches: Arc<CatalogCaches>,
    pub(super) slug_service: Arc<SlugService>,
}

impl CatalogCommandService {
    pub fn new(
        repo: Arc<dyn CatalogRepository>,
        caches: Arc<CatalogCaches>,
        slug_service: Arc<SlugService>,
    ) -> Self {
        Self {
            repo,
            caches,
            slug_service,
        }
    }
}
