// tests/support/helpers.rs
use std::sync::Arc;

use axum::Json;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use super::mocks::{DummyClock, InMemoryCatalogRepo, InMemoryPostRepo, InMemoryUserRepo};
use recruit_admin_core::application::ports::security::TokenProvider;
use recruit_admin_core::application::services::{ApplicationServices, Repositories};
use recruit_admin_core::infrastructure::http::ApiClient;
use recruit_admin_core::infrastructure::security::StaticTokenProvider;
use recruit_admin_core::infrastructure::util::DefaultSlugGenerator;

pub const ADMIN_EMAIL: &str = "admin@lp.vn";
pub const ADMIN_PASSWORD: &str = "Lp-Admin#2025";

/// Services wired to in-memory backends, with handles on the backends.
pub struct TestApp {
    pub services: ApplicationServices,
    pub catalog: Arc<InMemoryCatalogRepo>,
    pub posts: Arc<InMemoryPostRepo>,
    pub users: Arc<InMemoryUserRepo>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_attempts(50)
}

pub fn build_test_app_with_attempts(slug_max_attempts: u32) -> TestApp {
    let catalog = Arc::new(InMemoryCatalogRepo::new());
    let posts = Arc::new(InMemoryPostRepo::new());
    let users = Arc::new(InMemoryUserRepo::new(ADMIN_EMAIL, ADMIN_PASSWORD));

    let services = ApplicationServices::new(
        Repositories {
            catalog: catalog.clone(),
            posts: posts.clone(),
            users: users.clone(),
            dashboard: None,
        },
        Arc::new(StaticTokenProvider::new(Some("test-token".into()))),
        Arc::new(DummyClock),
        Arc::new(DefaultSlugGenerator),
        None,
        slug_max_attempts,
    );

    TestApp {
        services,
        catalog,
        posts,
        users,
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend");
    });
    format!("http://{addr}")
}

pub fn api_client(base_url: &str, token: Option<&str>) -> ApiClient {
    let tokens: Arc<dyn TokenProvider> =
        Arc::new(StaticTokenProvider::new(token.map(str::to_string)));
    ApiClient::new(base_url, reqwest::Client::new(), tokens)
}

/// `{ success: true, data }`
pub fn envelope(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub fn api_error(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({
        "success": false,
        "error": { "code": code, "message": message },
    });
    (status, Json(body)).into_response()
}

pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}
