use crate::domain::catalog::value_objects::{
    CatalogKind, EntityId, EntityName, EntitySlug, EntityStatus,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntity {
    pub id: EntityId,
    pub kind: CatalogKind,
    pub name: EntityName,
    pub slug: EntitySlug,
    pub status: EntityStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl CatalogEntity {
    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }
}

#[derive(Debug, Clone)]
pub struct NewCatalogEntity {
    pub kind: CatalogKind,
    pub name: EntityName,
    pub slug: EntitySlug,
    pub status: EntityStatus,
}

#[derive(Debug, Clone)]
pub struct CatalogEntityUpdate {
    pub kind: CatalogKind,
    pub id: EntityId,
    pub name: Option<EntityName>,
    pub slug: Option<EntitySlug>,
    pub status: Option<EntityStatus>,
}

impl CatalogEntityUpdate {
    pub fn new(kind: CatalogKind, id: EntityId) -> Self {
        Self {
            kind,
            id,
            name: None,
            slug: None,
            status: None,
        }
    }

    pub fn with_name(mut self, name: EntityName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: EntitySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_status(mut self, status: EntityStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.slug.is_none() && self.status.is_none()
    }
}
