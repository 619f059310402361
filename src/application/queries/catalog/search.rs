// src/application/queries/catalog/search.rs
use super::CatalogQueryService;
use crate::{
    application::{dto::CatalogEntityDto, error::ApplicationResult},
    domain::catalog::{CatalogFilter, CatalogKind},
};

pub struct SearchCatalogQuery {
    pub kind: CatalogKind,
    pub filter: CatalogFilter,
}

impl CatalogQueryService {
    pub async fn search(&self, query: SearchCatalogQuery) -> ApplicationResult<Vec<CatalogEntityDto>> {
        let items = self.caches.get(query.kind).items().await?;
        Ok(query
            .filter
            .apply(items.iter())
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
