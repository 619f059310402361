// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, Role, UserId};
use chrono::{DateTime, Utc};

/// Password assigned to accounts created from the admin screen; users are
/// expected to change it on first sign-in.
pub const DEFAULT_INITIAL_PASSWORD: &str = "123456";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub role: Role,
    pub password: String,
}

impl NewUser {
    pub fn new(email: Email, role: Role) -> Self {
        Self {
            email,
            role,
            password: DEFAULT_INITIAL_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}
