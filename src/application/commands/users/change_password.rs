use super::UserCommandService;
use crate::{
    application::{
        dto::PasswordChangedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordChange, evaluate_password},
};

pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<PasswordChangedDto> {
        validate_change(&command)?;
        let strength = evaluate_password(&command.new_password);

        let user = self
            .user_repo
            .change_password(PasswordChange {
                old_password: command.old_password,
                new_password: command.new_password,
            })
            .await?;

        tracing::info!(email = %user.email, strength = %strength.strength, "password changed");
        Ok(PasswordChangedDto {
            user: user.into(),
            strength,
        })
    }
}

fn validate_change(command: &ChangePasswordCommand) -> ApplicationResult<()> {
    if command.old_password.is_empty() {
        return Err(ApplicationError::validation("current password is required"));
    }
    if command.new_password.is_empty() {
        return Err(ApplicationError::validation("new password is required"));
    }
    if command.old_password == command.new_password {
        return Err(ApplicationError::validation(
            "new password must differ from the current one",
        ));
    }
    Ok(())
}
