// src/infrastructure/http/client.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::envelope::{read_ack, read_envelope, read_json};
use super::error::{map_reqwest, map_token_error};
use crate::application::ports::security::TokenProvider;
use crate::domain::errors::{DomainError, DomainResult};

pub fn build_http_client(timeout: Duration) -> DomainResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| DomainError::Backend(format!("failed to build HTTP client: {err}")))
}

/// JSON client for the admin REST API. Attaches the bearer token from the
/// configured [`TokenProvider`] to every call.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        http_client: reqwest::Client,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `segments` onto the base URL, each as one percent-encoded path
    /// segment. Empty, `.` and `..` segments are rejected.
    pub fn url(&self, segments: &[&str]) -> DomainResult<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(segment.trim(), "" | "." | ".."))
        {
            return Err(DomainError::validation(format!(
                "invalid path segment '{bad}'"
            )));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| DomainError::validation(format!("invalid API base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| DomainError::validation("API base URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` of an endpoint that does not use the envelope.
    pub async fn get_bare<T: DeserializeOwned>(&self, segments: &[&str]) -> DomainResult<T> {
        let url = self.url(segments)?;
        let response = self.send(self.http_client.get(url)).await?;
        read_json(response).await
    }

    /// `GET` where a 404 means "absent" rather than failure.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> DomainResult<Option<T>> {
        let url = self.url(segments)?;
        let response = self.send(self.http_client.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        read_envelope(response).await.map(Some)
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let response = self.send(self.http_client.post(url).json(body)).await?;
        read_envelope(response).await
    }

    /// `POST` that fails up front when no token is available.
    pub async fn post_authenticated<B, T>(&self, segments: &[&str], body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let response = self
            .send_authenticated(self.http_client.post(url).json(body))
            .await?;
        read_envelope(response).await
    }

    pub async fn patch<B, T>(&self, segments: &[&str], body: &B) -> DomainResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let response = self.send(self.http_client.patch(url).json(body)).await?;
        read_envelope(response).await
    }

    pub async fn delete(&self, segments: &[&str]) -> DomainResult<()> {
        let url = self.url(segments)?;
        let response = self.send(self.http_client.delete(url)).await?;
        read_ack(response).await
    }

    async fn send(&self, builder: RequestBuilder) -> DomainResult<Response> {
        let builder = match self.tokens.token().await.map_err(map_token_error)? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        self.dispatch(builder).await
    }

    async fn send_authenticated(&self, builder: RequestBuilder) -> DomainResult<Response> {
        let token = self
            .tokens
            .token()
            .await
            .map_err(map_token_error)?
            .ok_or_else(|| DomainError::Unauthorized("not signed in".into()))?;
        self.dispatch(builder.bearer_auth(token)).await
    }

    async fn dispatch(&self, builder: RequestBuilder) -> DomainResult<Response> {
        let started = Instant::now();
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(error = %err, "request failed");
            map_reqwest(err)
        })?;

        tracing::debug!(
            status = %response.status(),
            url = %response.url(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response received"
        );
        Ok(response)
    }
}
