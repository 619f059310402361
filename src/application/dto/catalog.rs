use crate::domain::catalog::{CatalogEntity, CatalogKind, EntityStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntityDto {
    pub id: String,
    pub kind: CatalogKind,
    pub name: String,
    pub slug: String,
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CatalogEntity> for CatalogEntityDto {
    fn from(entity: CatalogEntity) -> Self {
        Self {
            id: entity.id.into(),
            kind: entity.kind,
            name: entity.name.into(),
            slug: entity.slug.into(),
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

impl From<&CatalogEntity> for CatalogEntityDto {
    fn from(entity: &CatalogEntity) -> Self {
        entity.clone().into()
    }
}
