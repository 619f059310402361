// src/infrastructure/repositories/airtable_catalog.rs
use std::collections::HashMap;

use async_trait::async_trait;

use super::wire::decode_rows;
use crate::domain::catalog::{
    CatalogEntity, CatalogEntityUpdate, CatalogKind, CatalogRepository, EntityId, EntityName,
    EntitySlug, EntityStatus, NewCatalogEntity,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::airtable::{
    AirtableClient, AirtableRecord, CatalogFields, ListOptions, SortDirection, field_or_record_id,
};

/// Table name per collection; unset kinds use [`CatalogKind::default_table`].
#[derive(Debug, Clone, Default)]
pub struct AirtableTables {
    overrides: HashMap<CatalogKind, String>,
}

impl AirtableTables {
    pub fn with_table(mut self, kind: CatalogKind, table: impl Into<String>) -> Self {
        self.overrides.insert(kind, table.into());
        self
    }

    pub fn table(&self, kind: CatalogKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_table())
    }
}

fn into_entity(kind: CatalogKind, record: AirtableRecord<CatalogFields>) -> DomainResult<CatalogEntity> {
    let id = EntityId::new(record.id)?;
    let name = EntityName::new(record.fields.name.unwrap_or_default())?;
    // Rows typed straight into Airtable may lack a slug.
    let slug = match record.fields.slug.filter(|s| !s.trim().is_empty()) {
        Some(slug) => EntitySlug::from_remote(slug)?,
        None => EntitySlug::from_remote(id.as_str())?,
    };
    Ok(CatalogEntity {
        id,
        kind,
        name,
        slug,
        status: EntityStatus::from_remote(record.fields.status.as_deref()),
        created_at: record.created_time,
    })
}

/// Catalog collections stored as Airtable tables with `Name`, `Slug` and
/// `Status` columns.
#[derive(Clone)]
pub struct AirtableCatalogRepository {
    client: AirtableClient,
    tables: AirtableTables,
}

impl AirtableCatalogRepository {
    pub fn new(client: AirtableClient, tables: AirtableTables) -> Self {
        Self { client, tables }
    }

    async fn record_id(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<EntityId> {
        self.find_by_slug(kind, slug)
            .await?
            .map(|entity| entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("{} '{slug}' not found", kind.label())))
    }
}

#[async_trait]
impl CatalogRepository for AirtableCatalogRepository {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntity>> {
        let options = ListOptions::default().sort_by("Name", SortDirection::Asc);
        let records = self
            .client
            .list::<CatalogFields>(self.tables.table(kind), &options)
            .await?;
        Ok(decode_rows(kind.resource(), records, |record| {
            into_entity(kind, record)
        }))
    }

    async fn find_by_slug(
        &self,
        kind: CatalogKind,
        slug: &EntitySlug,
    ) -> DomainResult<Option<CatalogEntity>> {
        // Slugless rows are listed under their record id, so look those up too.
        let options = ListOptions::default()
            .filter(field_or_record_id("Slug", slug.as_str()))
            .max_records(1);
        let records = self
            .client
            .list::<CatalogFields>(self.tables.table(kind), &options)
            .await?;
        for record in records {
            let entity = into_entity(kind, record)?;
            if &entity.slug == slug {
                return Ok(Some(entity));
            }
        }
        Ok(None)
    }

    async fn insert(&self, entity: NewCatalogEntity) -> DomainResult<CatalogEntity> {
        let fields = CatalogFields {
            name: Some(entity.name.into()),
            slug: Some(entity.slug.into()),
            status: Some(entity.status.as_str().to_string()),
        };
        let record = self
            .client
            .create(self.tables.table(entity.kind), &fields)
            .await?;
        into_entity(entity.kind, record)
    }

    async fn update(&self, update: CatalogEntityUpdate) -> DomainResult<CatalogEntity> {
        let fields = CatalogFields {
            name: update.name.map(String::from),
            slug: update.slug.map(String::from),
            status: update.status.map(|status| status.as_str().to_string()),
        };
        let record = self
            .client
            .update(self.tables.table(update.kind), update.id.as_str(), &fields)
            .await?;
        into_entity(update.kind, record)
    }

    async fn delete(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<()> {
        let id = self.record_id(kind, slug).await?;
        self.client.delete(self.tables.table(kind), id.as_str()).await
    }

    /// Resolves every slug first so nothing is deleted when one is unknown.
    async fn delete_many(&self, kind: CatalogKind, slugs: &[EntitySlug]) -> DomainResult<()> {
        let existing = self.list(kind).await?;
        let ids = slugs
            .iter()
            .map(|slug| {
                existing
                    .iter()
                    .find(|entity| &entity.slug == slug)
                    .map(|entity| String::from(entity.id.clone()))
                    .ok_or_else(|| {
                        DomainError::NotFound(format!("{} '{slug}' not found", kind.label()))
                    })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        self.client.delete_many(self.tables.table(kind), &ids).await
    }
}
