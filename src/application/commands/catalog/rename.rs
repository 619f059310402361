// src/application/commands/catalog/rename.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::CatalogEntityDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        catalog::{CatalogEntityUpdate, CatalogKind, EntityName, EntitySlug},
        slug::CatalogSlugProbe,
    },
};

pub struct RenameCatalogEntityCommand {
    pub kind: CatalogKind,
    pub slug: String,
    pub name: String,
}

impl CatalogCommandService {
    pub async fn rename(
        &self,
        command: RenameCatalogEntityCommand,
    ) -> ApplicationResult<CatalogEntityDto> {
        let kind = command.kind;
        let slug = EntitySlug::from_remote(command.slug)?;
        let name = EntityName::new(command.name)?;

        let current = self
            .repo
            .find_by_slug(kind, &slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("{} '{slug}' not found", kind.label())))?;

        let probe = CatalogSlugProbe::new(self.repo.as_ref(), kind);
        let new_slug = self
            .slug_service
            .slug_for_rename(current.name.as_str(), &current.slug, name.as_str(), &probe)
            .await?;

        let mut update = CatalogEntityUpdate::new(kind, current.id.clone()).with_name(name);
        if new_slug != current.slug {
            update = update.with_slug(new_slug);
        }

        let updated = self.repo.update(update).await?;
        self.caches.get(kind).invalidate().await;
        tracing::info!(kind = %kind, slug = %updated.slug, "catalog entity renamed");
        Ok(updated.into())
    }
}
