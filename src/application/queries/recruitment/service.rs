use std::sync::Arc;

use crate::application::cache::CollectionCache;
use crate::domain::recruitment::RecruitmentPost;

pub struct RecruitmentQueryService {
    pub(super) cache: Arc<CollectionCache<RecruitmentPost>>,
}

impl RecruitmentQueryService {
    pub fn new(cache: Arc<CollectionCache<RecruitmentPost>>) -> Self {
        Self { cache }
    }
}
