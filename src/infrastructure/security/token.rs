// src/infrastructure/security/token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenProvider,
};
use crate::infrastructure::http::{envelope::read_envelope, error::map_reqwest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Token fixed at startup, e.g. from `API_TOKEN`.
#[derive(Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> ApplicationResult<Option<String>> {
        Ok(self.token.clone())
    }
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignInData {
    #[serde(alias = "access_token", alias = "accessToken")]
    token: String,
}

/// Signs in with email and password on first use and keeps the bearer token
/// until [`sign_out`](TokenProvider::sign_out).
pub struct SessionTokenProvider {
    base_url: String,
    http_client: reqwest::Client,
    credentials: Credentials,
    token: Mutex<Option<String>>,
}

impl SessionTokenProvider {
    pub fn new(
        base_url: impl Into<String>,
        http_client: reqwest::Client,
        credentials: Credentials,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            credentials,
            token: Mutex::new(None),
        }
    }

    async fn sign_in(&self) -> ApplicationResult<String> {
        let url = format!("{}/auth/sign-in", self.base_url);
        tracing::debug!(email = %self.credentials.email, "signing in");

        let response = self
            .http_client
            .post(&url)
            .json(&SignInRequest {
                email: &self.credentials.email,
                password: &self.credentials.password,
            })
            .send()
            .await
            .map_err(map_reqwest)?;

        let data: SignInData = read_envelope(response).await.map_err(|err| {
            match ApplicationError::from(err) {
                // A rejected sign-in is a credentials problem, whatever the status.
                ApplicationError::Validation(msg) | ApplicationError::NotFound(msg) => {
                    ApplicationError::unauthorized(msg)
                }
                other => other,
            }
        })?;

        if data.token.trim().is_empty() {
            return Err(ApplicationError::unauthorized("sign-in returned an empty token"));
        }
        tracing::info!(email = %self.credentials.email, "signed in");
        Ok(data.token)
    }
}

#[async_trait]
impl TokenProvider for SessionTokenProvider {
    async fn token(&self) -> ApplicationResult<Option<String>> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(Some(token.clone()));
        }
        let token = self.sign_in().await?;
        *slot = Some(token.clone());
        Ok(Some(token))
    }

    async fn sign_out(&self) {
        self.token.lock().await.take();
    }
}
