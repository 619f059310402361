// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Supplies the bearer token attached to backend calls. The token itself is
/// opaque to the client.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// `Ok(None)` means "not signed in"; requests then go out anonymously.
    async fn token(&self) -> ApplicationResult<Option<String>>;

    /// Drops any cached token so the next call re-authenticates.
    async fn sign_out(&self) {}
}
