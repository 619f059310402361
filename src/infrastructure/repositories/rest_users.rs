// src/infrastructure/repositories/rest_users.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{RemoteId, decode_rows};
use crate::domain::errors::DomainResult;
use crate::domain::user::{Email, NewUser, PasswordChange, Role, User, UserId, UserRepository};
use crate::infrastructure::http::ApiClient;

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: RemoteId,
    email: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default = "default_active", alias = "isActive")]
    is_active: bool,
    #[serde(default, alias = "createdAt")]
    created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    fn into_user(self) -> DomainResult<User> {
        let role = match self.role.as_deref() {
            Some(role) => role.parse()?,
            None => Role::default(),
        };
        Ok(User {
            id: UserId::new(self.id.to_string())?,
            email: Email::new(self.email)?,
            role,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

#[derive(Serialize)]
struct CreateUserBody<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Serialize)]
struct ChangePasswordBody<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Clone)]
pub struct RestUserRepository {
    client: ApiClient,
}

impl RestUserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserRepository for RestUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows: Vec<UserRecord> = self.client.get_optional(&["users"]).await?.unwrap_or_default();
        Ok(decode_rows("users", rows, UserRecord::into_user))
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let body = CreateUserBody {
            email: new_user.email.as_str(),
            password: &new_user.password,
            role: new_user.role,
        };
        let row: UserRecord = self.client.post(&["users"], &body).await?;
        row.into_user()
    }

    async fn change_password(&self, change: PasswordChange) -> DomainResult<User> {
        let body = ChangePasswordBody {
            old_password: &change.old_password,
            new_password: &change.new_password,
        };
        let row: UserRecord = self
            .client
            .post_authenticated(&["auth", "change-password"], &body)
            .await?;
        row.into_user()
    }
}
