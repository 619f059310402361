// src/application/commands/catalog/toggle.rs
use super::CatalogCommandService;
use crate::{
    application::{
        dto::CatalogEntityDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{CatalogEntityUpdate, CatalogKind, EntityId, EntitySlug, EntityStatus},
};

pub struct ToggleStatusCommand {
    pub kind: CatalogKind,
    pub id: String,
    pub current: EntityStatus,
}

impl CatalogCommandService {
    /// Flips Active/Disabled. The cache is invalidated even when the update
    /// fails so the list resyncs with the server; the error is still returned.
    pub async fn toggle_status(
        &self,
        command: ToggleStatusCommand,
    ) -> ApplicationResult<CatalogEntityDto> {
        let kind = command.kind;
        let id = EntityId::new(command.id)?;
        let next = command.current.toggled();

        let update = CatalogEntityUpdate::new(kind, id.clone()).with_status(next);
        let result = self.repo.update(update).await;
        self.caches.get(kind).invalidate().await;

        match result {
            Ok(updated) => {
                tracing::info!(kind = %kind, id = %id, status = %next, "catalog status toggled");
                Ok(updated.into())
            }
            Err(err) => {
                tracing::warn!(kind = %kind, id = %id, error = %err, "catalog status toggle failed");
                Err(err.into())
            }
        }
    }

    /// Resolves `slug` through the cached list, then toggles it.
    pub async fn toggle_status_by_slug(
        &self,
        kind: CatalogKind,
        slug: &str,
    ) -> ApplicationResult<CatalogEntityDto> {
        let slug = EntitySlug::from_remote(slug)?;
        let items = self.caches.get(kind).items().await?;
        let entity = items
            .iter()
            .find(|entity| entity.slug == slug)
            .ok_or_else(|| ApplicationError::not_found(format!("{} '{slug}' not found", kind.label())))?;

        self.toggle_status(ToggleStatusCommand {
            kind,
            id: entity.id.to_string(),
            current: entity.status,
        })
        .await
    }
}
