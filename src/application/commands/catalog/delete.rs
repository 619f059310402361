// src/application/commands/catalog/delete.rs
use super::CatalogCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::catalog::{CatalogKind, EntitySlug},
};

pub struct DeleteCatalogEntitiesCommand {
    pub kind: CatalogKind,
    pub slugs: Vec<String>,
}

impl CatalogCommandService {
    /// Deletes the given records and returns how many were requested. The
    /// cache is invalidated whatever the outcome, since a failed batch may
    /// have partially applied.
    pub async fn delete(&self, command: DeleteCatalogEntitiesCommand) -> ApplicationResult<usize> {
        let kind = command.kind;
        if command.slugs.is_empty() {
            return Ok(0);
        }

        let slugs = command
            .slugs
            .into_iter()
            .map(EntitySlug::from_remote)
            .collect::<Result<Vec<_>, _>>()?;

        let result = match slugs.as_slice() {
            [single] => self.repo.delete(kind, single).await,
            many => self.repo.delete_many(kind, many).await,
        };

        self.caches.get(kind).invalidate().await;
        result?;

        tracing::info!(kind = %kind, count = slugs.len(), "catalog entities deleted");
        Ok(slugs.len())
    }
}
