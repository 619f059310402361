// src/application/commands/catalog/create.rs
use super::CatalogCommandService;
use crate::{
    application::{dto::CatalogEntityDto, error::ApplicationResult},
    domain::{
        catalog::{CatalogKind, EntityName, EntityStatus, NewCatalogEntity},
        slug::CatalogSlugProbe,
    },
};

pub struct CreateCatalogEntityCommand {
    pub kind: CatalogKind,
    pub name: String,
    pub status: EntityStatus,
}

impl CreateCatalogEntityCommand {
    pub fn builder(kind: CatalogKind) -> CreateCatalogEntityCommandBuilder {
        CreateCatalogEntityCommandBuilder {
            kind,
            name: None,
            status: EntityStatus::Active,
        }
    }
}

pub struct CreateCatalogEntityCommandBuilder {
    kind: CatalogKind,
    name: Option<String>,
    status: EntityStatus,
}

impl CreateCatalogEntityCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Result<CreateCatalogEntityCommand, &'static str> {
        Ok(CreateCatalogEntityCommand {
            kind: self.kind,
            name: self.name.ok_or("name is required")?,
            status: self.status,
        })
    }
}

impl CatalogCommandService {
    pub async fn create(
        &self,
        command: CreateCatalogEntityCommand,
    ) -> ApplicationResult<CatalogEntityDto> {
        let kind = command.kind;
        let name = EntityName::new(command.name)?;

        let probe = CatalogSlugProbe::new(self.repo.as_ref(), kind);
        let slug = self
            .slug_service
            .generate_unique_slug(name.as_str(), &probe)
            .await?;

        let created = self
            .repo
            .insert(NewCatalogEntity {
                kind,
                name,
                slug,
                status: command.status,
            })
            .await?;

        self.caches.get(kind).invalidate().await;
        tracing::info!(kind = %kind, slug = %created.slug, "catalog entity created");
        Ok(created.into())
    }
}
