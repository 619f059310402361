// src/application/commands/recruitment/service.rs
use std::sync::Arc;

use crate::{
    application::cache::CollectionCache,
    domain::{
        recruitment::{RecruitmentPost, RecruitmentPostRepository},
        slug::SlugService,
    },
};

pub struct RecruitmentCommandService {
    pub(super) repo: Arc<dyn RecruitmentPostRepository>,
    pub(super) cache: Arc<CollectionCache<RecruitmentPost>>,
    pub(super) slug_service: Arc<SlugService>,
}

impl RecruitmentCommandService {
    pub fn new(
        repo: Arc<dyn RecruitmentPostRepository>,
        cache: Arc<CollectionCache<RecruitmentPost>>,
        slug_service: Arc<SlugService>,
    ) -> Self {
        Self {
            repo,
            cache,
            slug_service,
        }
    }

    pub async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
    }
}
