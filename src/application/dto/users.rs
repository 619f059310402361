use crate::domain::user::{PasswordStrengthReport, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        user.clone().into()
    }
}

/// Result of a password change: the refreshed account plus advisory
/// strength of the new password.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangedDto {
    pub user: UserDto,
    pub strength: PasswordStrengthReport,
}
