use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, Role},
};

pub struct CreateUserCommand {
    pub email: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Creates an account with the default initial password.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let role = command.role.unwrap_or_default();

        let user = self.user_repo.insert(NewUser::new(email, role)).await?;
        self.cache.invalidate().await;
        tracing::info!(email = %user.email, role = %user.role, "user created");
        Ok(user.into())
    }
}
