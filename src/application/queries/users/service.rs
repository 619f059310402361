use std::sync::Arc;

use crate::application::cache::CollectionCache;
use crate::domain::user::User;

pub struct UserQueryService {
    pub(super) cache: Arc<CollectionCache<User>>,
}

impl UserQueryService {
    pub fn new(cache: Arc<CollectionCache<User>>) -> Self {
        Self { cache }
    }
}
