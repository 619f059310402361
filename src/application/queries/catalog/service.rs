// src/application/queries/catalog/service.rs
use std::sync::Arc;

use crate::application::cache::CatalogCaches;

pub struct CatalogQueryService {
    pub(super) caches: Arc<CatalogCaches>,
}

impl CatalogQueryService {
    pub fn new(caches: Arc<CatalogCaches>) -> Self {
        Self { caches }
    }
}
