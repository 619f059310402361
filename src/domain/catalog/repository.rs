use crate::domain::catalog::entity::{CatalogEntity, CatalogEntityUpdate, NewCatalogEntity};
use crate::domain::catalog::value_objects::{CatalogKind, EntitySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Remote store for the catalog collections. One adapter serves every
/// [`CatalogKind`].
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntity>>;
    async fn find_by_slug(
        &self,
        kind: CatalogKind,
        slug: &EntitySlug,
    ) -> DomainResult<Option<CatalogEntity>>;
    async fn insert(&self, entity: NewCatalogEntity) -> DomainResult<CatalogEntity>;
    async fn update(&self, update: CatalogEntityUpdate) -> DomainResult<CatalogEntity>;
    async fn delete(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<()>;

    /// Removes several records. Adapters without a batch endpoint fall back
    /// to one call per slug.
    async fn delete_many(&self, kind: CatalogKind, slugs: &[EntitySlug]) -> DomainResult<()> {
        for slug in slugs {
            self.delete(kind, slug).await?;
        }
        Ok(())
    }

    async fn slug_exists(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<bool> {
        Ok(self.find_by_slug(kind, slug).await?.is_some())
    }
}
