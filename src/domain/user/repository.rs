use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, PasswordChange, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Changes the password of the account owning the current token.
    async fn change_password(&self, change: PasswordChange) -> DomainResult<User>;
}
