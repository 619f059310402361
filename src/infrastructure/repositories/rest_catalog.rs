// src/infrastructure/repositories/rest_catalog.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{RemoteId, decode_rows};
use crate::domain::catalog::{
    CatalogEntity, CatalogEntityUpdate, CatalogKind, CatalogRepository, EntityId, EntityName,
    EntitySlug, EntityStatus, NewCatalogEntity,
};
use crate::domain::errors::DomainResult;
use crate::infrastructure::http::ApiClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRecord {
    id: RemoteId,
    name: String,
    slug: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, alias = "created_at")]
    created_at: Option<DateTime<Utc>>,
}

impl CatalogRecord {
    fn into_entity(self, kind: CatalogKind) -> DomainResult<CatalogEntity> {
        Ok(CatalogEntity {
            id: EntityId::new(self.id.to_string())?,
            kind,
            name: EntityName::new(self.name)?,
            slug: EntitySlug::from_remote(self.slug)?,
            status: EntityStatus::from_remote(self.status.as_deref()),
            created_at: self.created_at,
        })
    }
}

#[derive(Serialize)]
struct CatalogBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
}

/// Catalog collections served by the admin REST API under `/{resource}`.
#[derive(Clone)]
pub struct RestCatalogRepository {
    client: ApiClient,
}

impl RestCatalogRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogRepository for RestCatalogRepository {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntity>> {
        // 404 means the collection has no records yet.
        let rows: Vec<CatalogRecord> = self
            .client
            .get_optional(&[kind.resource()])
            .await?
            .unwrap_or_default();
        Ok(decode_rows(kind.resource(), rows, |row| row.into_entity(kind)))
    }

    async fn find_by_slug(
        &self,
        kind: CatalogKind,
        slug: &EntitySlug,
    ) -> DomainResult<Option<CatalogEntity>> {
        let row: Option<CatalogRecord> = self
            .client
            .get_optional(&[kind.resource(), slug.as_str()])
            .await?;
        row.map(|row| row.into_entity(kind)).transpose()
    }

    async fn insert(&self, entity: NewCatalogEntity) -> DomainResult<CatalogEntity> {
        let body = CatalogBody {
            name: Some(entity.name.as_str()),
            slug: Some(entity.slug.as_str()),
            status: Some(entity.status.as_str()),
        };
        let row: CatalogRecord = self.client.post(&[entity.kind.resource()], &body).await?;
        row.into_entity(entity.kind)
    }

    async fn update(&self, update: CatalogEntityUpdate) -> DomainResult<CatalogEntity> {
        let body = CatalogBody {
            name: update.name.as_ref().map(EntityName::as_str),
            slug: update.slug.as_ref().map(EntitySlug::as_str),
            status: update.status.map(|status| status.as_str()),
        };
        let row: CatalogRecord = self
            .client
            .patch(&[update.kind.resource(), update.id.as_str()], &body)
            .await?;
        row.into_entity(update.kind)
    }

    async fn delete(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<()> {
        self.client.delete(&[kind.resource(), slug.as_str()]).await
    }
}
