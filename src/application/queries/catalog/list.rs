// src/application/queries/catalog/list.rs
use super::CatalogQueryService;
use crate::{
    application::{
        cache::ListState,
        dto::CatalogEntityDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CatalogEntity, CatalogKind, EntitySlug},
};

impl CatalogQueryService {
    /// Cached list state for a collection; errors are carried in the state.
    pub async fn list(&self, kind: CatalogKind) -> ListState<CatalogEntity> {
        self.caches.get(kind).read().await
    }

    /// Forces a fresh fetch of one collection.
    pub async fn refresh(&self, kind: CatalogKind) -> ListState<CatalogEntity> {
        let cache = self.caches.get(kind);
        cache.invalidate().await;
        cache.read().await
    }

    /// Active records only, as offered in the posting form pickers.
    pub async fn active(&self, kind: CatalogKind) -> ApplicationResult<Vec<CatalogEntityDto>> {
        let items = self.caches.get(kind).items().await?;
        Ok(items
            .iter()
            .filter(|entity| entity.is_active())
            .map(CatalogEntityDto::from)
            .collect())
    }

    pub async fn find_by_slug(
        &self,
        kind: CatalogKind,
        slug: &str,
    ) -> ApplicationResult<CatalogEntityDto> {
        let slug = EntitySlug::from_remote(slug)?;
        let items = self.caches.get(kind).items().await?;
        items
            .iter()
            .find(|entity| entity.slug == slug)
            .map(CatalogEntityDto::from)
            .ok_or_else(|| {
                ApplicationError::not_found(format!("{} '{slug}' not found", kind.label()))
            })
    }
}
