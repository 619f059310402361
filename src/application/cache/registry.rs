// src/application/cache/registry.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use super::collection::{CollectionCache, CollectionFetcher};
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::catalog::{CatalogEntity, CatalogKind, CatalogRepository};
use crate::domain::recruitment::{RecruitmentPost, RecruitmentPostRepository};
use crate::domain::user::{User, UserRepository};

struct CatalogFetcher {
    repo: Arc<dyn CatalogRepository>,
    kind: CatalogKind,
}

#[async_trait]
impl CollectionFetcher<CatalogEntity> for CatalogFetcher {
    async fn fetch(&self) -> ApplicationResult<Vec<CatalogEntity>> {
        Ok(self.repo.list(self.kind).await?)
    }
}

struct PostFetcher(Arc<dyn RecruitmentPostRepository>);

#[async_trait]
impl CollectionFetcher<RecruitmentPost> for PostFetcher {
    async fn fetch(&self) -> ApplicationResult<Vec<RecruitmentPost>> {
        Ok(self.0.list().await?)
    }
}

struct UserFetcher(Arc<dyn UserRepository>);

#[async_trait]
impl CollectionFetcher<User> for UserFetcher {
    async fn fetch(&self) -> ApplicationResult<Vec<User>> {
        Ok(self.0.list().await?)
    }
}

pub fn post_cache(
    repo: Arc<dyn RecruitmentPostRepository>,
    clock: Arc<dyn Clock>,
    ttl: Option<Duration>,
) -> Arc<CollectionCache<RecruitmentPost>> {
    Arc::new(CollectionCache::new(
        "recruitment-posts",
        Arc::new(PostFetcher(repo)),
        clock,
        ttl,
    ))
}

pub fn user_cache(
    repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
    ttl: Option<Duration>,
) -> Arc<CollectionCache<User>> {
    Arc::new(CollectionCache::new("users", Arc::new(UserFetcher(repo)), clock, ttl))
}

/// Owns one [`CollectionCache`] per catalog collection. Shared by reference
/// between every consumer so a write on one screen is visible on all others
/// after invalidation.
pub struct CatalogCaches {
    caches: [Arc<CollectionCache<CatalogEntity>>; 4],
}

impl CatalogCaches {
    pub fn new(
        repo: Arc<dyn CatalogRepository>,
        clock: Arc<dyn Clock>,
        ttl: Option<Duration>,
    ) -> Self {
        let caches = CatalogKind::ALL.map(|kind| {
            let fetcher: Arc<dyn CollectionFetcher<CatalogEntity>> = Arc::new(CatalogFetcher {
                repo: Arc::clone(&repo),
                kind,
            });
            Arc::new(CollectionCache::new(
                kind.resource(),
                fetcher,
                Arc::clone(&clock),
                ttl,
            ))
        });
        Self { caches }
    }

    pub fn get(&self, kind: CatalogKind) -> Arc<CollectionCache<CatalogEntity>> {
        let index = match kind {
            CatalogKind::Location => 0,
            CatalogKind::JobCategory => 1,
            CatalogKind::JobType => 2,
            CatalogKind::ProductGroup => 3,
        };
        Arc::clone(&self.caches[index])
    }

    pub async fn invalidate_all(&self) {
        for cache in &self.caches {
            cache.invalidate().await;
        }
    }
}
