use std::sync::Arc;

use crate::application::cache::CollectionCache;
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) cache: Arc<CollectionCache<User>>,
}

impl UserCommandService {
    pub fn new(user_repo: Arc<dyn UserRepository>, cache: Arc<CollectionCache<User>>) -> Self {
        Self { user_repo, cache }
    }

    pub async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
    }
}
