// src/infrastructure/http/envelope.rs
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::{map_reqwest, map_status};
use crate::domain::errors::{DomainError, DomainResult};

/// `{ success, data, message }` on success,
/// `{ success: false, error: { code, message, details }, message }` otherwise.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl<T> ApiEnvelope<T> {
    fn failure_message(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|err| err.message.clone())
            .or_else(|| self.message.clone())
            .filter(|msg| !msg.trim().is_empty())
    }
}

/// Best-effort message from an error response body.
pub fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.failure_message())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        })
}

async fn success_body(response: Response) -> DomainResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(map_reqwest)?;

    if !status.is_success() {
        let message = error_message(status, &body);
        tracing::warn!(status = %status, message = %message, "backend returned error");
        return Err(map_status(status, message));
    }
    Ok(body)
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> DomainResult<ApiEnvelope<T>> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|err| DomainError::Backend(format!("malformed response body: {err}")))?;

    if !envelope.success {
        let message = envelope
            .failure_message()
            .unwrap_or_else(|| "request was not successful".to_string());
        return Err(DomainError::Backend(message));
    }
    Ok(envelope)
}

/// Checks the status, then unwraps `data` from the envelope.
pub async fn read_envelope<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    let body = success_body(response).await?;
    parse_envelope::<T>(&body)?
        .data
        .ok_or_else(|| DomainError::Backend("response carried no data".into()))
}

/// For endpoints that answer with a bare JSON document.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    let body = success_body(response).await?;
    serde_json::from_str(&body)
        .map_err(|err| DomainError::Backend(format!("malformed response body: {err}")))
}

/// For calls whose payload is irrelevant. An empty body counts as success.
pub async fn read_ack(response: Response) -> DomainResult<()> {
    let body = success_body(response).await?;
    if body.trim().is_empty() {
        return Ok(());
    }
    parse_envelope::<serde_json::Value>(&body).map(drop)
}
