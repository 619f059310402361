use super::UserQueryService;
use crate::{
    application::{cache::ListState, dto::UserDto, error::ApplicationResult},
    domain::user::{Role, User},
};

pub struct ListUsersQuery {
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserQueryService {
    pub async fn list(&self) -> ListState<User> {
        self.cache.read().await
    }

    /// Case-insensitive email search, optionally restricted to one role.
    pub async fn search(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let users = self.cache.items().await?;
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(users
            .iter()
            .filter(|user| query.role.is_none_or(|role| user.role == role))
            .filter(|user| {
                needle
                    .as_deref()
                    .is_none_or(|needle| user.email.as_str().to_lowercase().contains(needle))
            })
            .map(UserDto::from)
            .collect())
    }
}
