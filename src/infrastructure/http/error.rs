// src/infrastructure/http/error.rs
use reqwest::StatusCode;

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        DomainError::Unavailable(err.to_string())
    } else if err.is_decode() {
        DomainError::Backend(format!("malformed response body: {err}"))
    } else {
        DomainError::Backend(err.to_string())
    }
}

/// Maps a non-success status plus the best message we could extract.
pub fn map_status(status: StatusCode, message: String) -> DomainError {
    match status {
        StatusCode::UNAUTHORIZED => DomainError::Unauthorized(message),
        StatusCode::FORBIDDEN => DomainError::Forbidden(message),
        StatusCode::NOT_FOUND => DomainError::NotFound(message),
        StatusCode::CONFLICT => DomainError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DomainError::Validation(message)
        }
        _ => DomainError::Backend(format!("{status}: {message}")),
    }
}

/// Token supply failures surface through the repositories that asked for one.
pub fn map_token_error(err: ApplicationError) -> DomainError {
    match err {
        ApplicationError::Unauthorized(msg) => DomainError::Unauthorized(msg),
        ApplicationError::Network(msg) => DomainError::Unavailable(msg),
        other => DomainError::Backend(other.to_string()),
    }
}
