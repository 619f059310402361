// src/presentation/cli/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use thiserror::Error;

/// An application failure as seen by a shell: a message plus an exit code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    exit_code: i32,
    message: String,
}

impl CliError {
    pub fn from_error(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Validation(_) => Self::new(2, message),
            ApplicationError::NotFound(_) => Self::new(3, message),
            ApplicationError::Conflict(_) => Self::new(4, message),
            ApplicationError::Unauthorized(_) => Self::new(
                5,
                format!("{message} (check API_TOKEN or ADMIN_EMAIL/ADMIN_PASSWORD)"),
            ),
            ApplicationError::Forbidden(_) => Self::new(5, message),
            ApplicationError::SlugGeneration(_) | ApplicationError::SlugExhausted { .. } => {
                Self::new(6, message)
            }
            ApplicationError::Network(_) => Self::new(7, message),
            ApplicationError::Infrastructure(_) => Self::new(1, message),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(1, message.into())
    }

    fn new(exit_code: i32, message: String) -> Self {
        Self { exit_code, message }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("failed to render JSON: {err}"))
    }
}

pub type CliResult<T> = Result<T, CliError>;

pub trait IntoCliResult<T> {
    fn into_cli(self) -> CliResult<T>;
}

impl<T> IntoCliResult<T> for ApplicationResult<T> {
    fn into_cli(self) -> CliResult<T> {
        self.map_err(CliError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_points_at_credentials() {
        let err = CliError::from_error(ApplicationError::unauthorized("token expired"));
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("ADMIN_EMAIL"));
    }

    #[test]
    fn exhausted_slugs_have_their_own_code() {
        let err = CliError::from_error(ApplicationError::SlugExhausted {
            base: "kho".into(),
            attempts: 50,
        });
        assert_eq!(err.exit_code(), 6);
    }
}
