// tests/support/mocks/catalog_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use recruit_admin_core::domain::catalog::{
    CatalogEntity, CatalogEntityUpdate, CatalogKind, CatalogRepository, EntityId, EntityName,
    EntitySlug, EntityStatus, NewCatalogEntity,
};
use recruit_admin_core::domain::errors::{DomainError, DomainResult};

/// Failure a test can switch on for one kind of call.
#[derive(Debug, Clone, Copy)]
pub enum Outage {
    Unauthorized,
    Unavailable,
}

impl Outage {
    fn error(self) -> DomainError {
        match self {
            Outage::Unauthorized => DomainError::Unauthorized("token expired".into()),
            Outage::Unavailable => DomainError::Unavailable("connection refused".into()),
        }
    }
}

/// Catalog backend held in memory, with call counters and failure switches.
#[derive(Default)]
pub struct InMemoryCatalogRepo {
    rows: Mutex<Vec<CatalogEntity>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    probe_calls: AtomicUsize,
    inserts: AtomicUsize,
    list_outage: Mutex<Option<Outage>>,
    probe_outage: Mutex<Option<Outage>>,
    update_outage: Mutex<Option<Outage>>,
}

impl InMemoryCatalogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, kind: CatalogKind, name: &str, slug: &str, status: EntityStatus) -> CatalogEntity {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let entity = CatalogEntity {
            id: EntityId::new(format!("rec{id}")).unwrap(),
            kind,
            name: EntityName::new(name).unwrap(),
            slug: EntitySlug::from_remote(slug).unwrap(),
            status,
            created_at: None,
        };
        self.rows.lock().unwrap().push(entity.clone());
        entity
    }

    pub fn rows(&self, kind: CatalogKind) -> Vec<CatalogEntity> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.kind == kind)
            .cloned()
            .collect()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn fail_list(&self, outage: Option<Outage>) {
        *self.list_outage.lock().unwrap() = outage;
    }

    pub fn fail_probe(&self, outage: Option<Outage>) {
        *self.probe_outage.lock().unwrap() = outage;
    }

    pub fn fail_update(&self, outage: Option<Outage>) {
        *self.update_outage.lock().unwrap() = outage;
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepo {
    async fn list(&self, kind: CatalogKind) -> DomainResult<Vec<CatalogEntity>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(outage) = *self.list_outage.lock().unwrap() {
            return Err(outage.error());
        }
        Ok(self.rows(kind))
    }

    async fn find_by_slug(
        &self,
        kind: CatalogKind,
        slug: &EntitySlug,
    ) -> DomainResult<Option<CatalogEntity>> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(outage) = *self.probe_outage.lock().unwrap() {
            return Err(outage.error());
        }
        Ok(self.rows(kind).into_iter().find(|row| &row.slug == slug))
    }

    async fn insert(&self, entity: NewCatalogEntity) -> DomainResult<CatalogEntity> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.kind == entity.kind && row.slug == entity.slug)
        {
            return Err(DomainError::Conflict(format!("slug '{}' exists", entity.slug)));
        }
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = CatalogEntity {
            id: EntityId::new(format!("rec{id}")).unwrap(),
            kind: entity.kind,
            name: entity.name,
            slug: entity.slug,
            status: entity.status,
            created_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CatalogEntityUpdate) -> DomainResult<CatalogEntity> {
        if let Some(outage) = *self.update_outage.lock().unwrap() {
            return Err(outage.error());
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.kind == update.kind && row.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("record {}", update.id)))?;
        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(status) = update.status {
            row.status = status;
        }
        Ok(row.clone())
    }

    async fn delete(&self, kind: CatalogKind, slug: &EntitySlug) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !(row.kind == kind && &row.slug == slug));
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("slug '{slug}'")));
        }
        Ok(())
    }
}
