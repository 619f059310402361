// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        cache::{CatalogCaches, post_cache, user_cache},
        commands::{
            catalog::CatalogCommandService, recruitment::RecruitmentCommandService,
            users::UserCommandService,
        },
        ports::{security::TokenProvider, time::Clock, util::SlugGenerator},
        queries::{
            catalog::CatalogQueryService, dashboard::DashboardQueryService,
            recruitment::RecruitmentQueryService, users::UserQueryService,
        },
    },
    domain::{
        catalog::CatalogRepository, dashboard::DashboardRepository,
        recruitment::RecruitmentPostRepository, slug::SlugService, user::UserRepository,
    },
};

/// Backend adapters the services run against.
pub struct Repositories {
    pub catalog: Arc<dyn CatalogRepository>,
    pub posts: Arc<dyn RecruitmentPostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub dashboard: Option<Arc<dyn DashboardRepository>>,
}

pub struct ApplicationServices {
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub recruitment_commands: Arc<RecruitmentCommandService>,
    pub recruitment_queries: Arc<RecruitmentQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    catalog_caches: Arc<CatalogCaches>,
    token_provider: Arc<dyn TokenProvider>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        token_provider: Arc<dyn TokenProvider>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        cache_ttl: Option<Duration>,
        slug_max_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slugger, slug_max_attempts));

        let catalog_caches = Arc::new(CatalogCaches::new(
            Arc::clone(&repos.catalog),
            Arc::clone(&clock),
            cache_ttl,
        ));
        let posts = post_cache(Arc::clone(&repos.posts), Arc::clone(&clock), cache_ttl);
        let users = user_cache(Arc::clone(&repos.users), clock, cache_ttl);

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&repos.catalog),
            Arc::clone(&catalog_caches),
            Arc::clone(&slug_service),
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(Arc::clone(&catalog_caches)));

        let recruitment_commands = Arc::new(RecruitmentCommandService::new(
            repos.posts,
            Arc::clone(&posts),
            slug_service,
        ));
        let recruitment_queries = Arc::new(RecruitmentQueryService::new(posts));

        let user_commands = Arc::new(UserCommandService::new(repos.users, Arc::clone(&users)));
        let user_queries = Arc::new(UserQueryService::new(users));

        let dashboard_queries = Arc::new(DashboardQueryService::new(repos.dashboard));

        Self {
            catalog_commands,
            catalog_queries,
            recruitment_commands,
            recruitment_queries,
            user_commands,
            user_queries,
            dashboard_queries,
            catalog_caches,
            token_provider,
        }
    }

    pub fn catalog_caches(&self) -> Arc<CatalogCaches> {
        Arc::clone(&self.catalog_caches)
    }

    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        Arc::clone(&self.token_provider)
    }

    /// Drops the session token and every memoized collection.
    pub async fn sign_out(&self) {
        self.token_provider.sign_out().await;
        self.catalog_caches.invalidate_all().await;
        self.recruitment_commands.invalidate_cache().await;
        self.user_commands.invalidate_cache().await;
        tracing::info!("signed out");
    }
}
