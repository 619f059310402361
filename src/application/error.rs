// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to generate unique slug: {0}")]
    SlugGeneration(String),

    #[error("no free slug for '{base}' after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Callers route to sign-in on this one.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Unauthorized(msg) => Self::Unauthorized(msg),
            DomainError::Forbidden(msg) => Self::Forbidden(msg),
            DomainError::Unavailable(msg) => Self::Network(msg),
            DomainError::Backend(msg) => Self::Infrastructure(msg),
            DomainError::SlugProbe(msg) => Self::SlugGeneration(msg),
            DomainError::SlugExhausted { base, attempts } => {
                Self::SlugExhausted { base, attempts }
            }
        }
    }
}
