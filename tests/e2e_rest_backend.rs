// tests/e2e_rest_backend.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use recruit_admin_core::application::ApplicationError;
use recruit_admin_core::application::commands::catalog::{
    CreateCatalogEntityCommand, DeleteCatalogEntitiesCommand,
};
use recruit_admin_core::application::commands::users::ChangePasswordCommand;
use recruit_admin_core::application::ports::security::TokenProvider;
use recruit_admin_core::application::services::{ApplicationServices, Repositories};
use recruit_admin_core::domain::catalog::{CatalogKind, EntityStatus};
use recruit_admin_core::domain::user::Role;
use recruit_admin_core::infrastructure::http::ApiClient;
use recruit_admin_core::infrastructure::repositories::{
    RestCatalogRepository, RestDashboardRepository, RestRecruitmentPostRepository,
    RestUserRepository,
};
use recruit_admin_core::infrastructure::security::{
    Credentials, SessionTokenProvider, StaticTokenProvider,
};
use recruit_admin_core::infrastructure::time::SystemClock;
use recruit_admin_core::infrastructure::util::DefaultSlugGenerator;

mod support;
use support::{ADMIN_EMAIL, ADMIN_PASSWORD, api_error, bearer, envelope, spawn_backend};

const TOKEN: &str = "t0k";

#[derive(Clone, Default)]
struct Backend {
    locations: Arc<Mutex<Vec<Value>>>,
    sign_ins: Arc<AtomicUsize>,
    password_calls: Arc<AtomicUsize>,
}

impl Backend {
    fn with_location(self, id: i64, name: &str, slug: &str) -> Self {
        self.locations.lock().unwrap().push(json!({
            "id": id,
            "name": name,
            "slug": slug,
            "status": "Active",
        }));
        self
    }
}

fn id_matches(row: &Value, key: &str) -> bool {
    match &row["id"] {
        Value::Number(n) => n.to_string() == key,
        Value::String(s) => s == key,
        _ => false,
    }
}

fn authorized(headers: &HeaderMap) -> Result<(), Response> {
    match bearer(headers) {
        Some(TOKEN) => Ok(()),
        _ => Err(api_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "missing or invalid token")),
    }
}

async fn list_locations(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    let rows = backend.locations.lock().unwrap().clone();
    envelope(Value::Array(rows)).into_response()
}

async fn find_location(
    State(backend): State<Backend>,
    Path(slug): Path<String>,
) -> Response {
    let rows = backend.locations.lock().unwrap();
    match rows.iter().find(|row| row["slug"] == slug.as_str()) {
        Some(row) => envelope(row.clone()).into_response(),
        None => api_error(StatusCode::NOT_FOUND, "NOT_FOUND", "location not found"),
    }
}

async fn create_location(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    let mut rows = backend.locations.lock().unwrap();
    let mut row = body;
    row["id"] = json!(100 + rows.len());
    rows.push(row.clone());
    (StatusCode::CREATED, envelope(row)).into_response()
}

async fn update_location(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut rows = backend.locations.lock().unwrap();
    let Some(row) = rows.iter_mut().find(|row| id_matches(row, &id)) else {
        return api_error(StatusCode::NOT_FOUND, "NOT_FOUND", "location not found");
    };
    if let (Some(target), Some(patch)) = (row.as_object_mut(), body.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    envelope(row.clone()).into_response()
}

async fn delete_location(
    State(backend): State<Backend>,
    Path(slug): Path<String>,
) -> StatusCode {
    let mut rows = backend.locations.lock().unwrap();
    let before = rows.len();
    rows.retain(|row| row["slug"] != slug.as_str());
    if rows.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn sign_in(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend.sign_ins.fetch_add(1, Ordering::SeqCst);
    if body["email"] == ADMIN_EMAIL && body["password"] == ADMIN_PASSWORD {
        envelope(json!({ "token": TOKEN })).into_response()
    } else {
        api_error(StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", "Invalid email or password")
    }
}

async fn change_password(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    backend.password_calls.fetch_add(1, Ordering::SeqCst);
    if let Err(denied) = authorized(&headers) {
        return denied;
    }
    envelope(json!({ "id": 1, "email": ADMIN_EMAIL, "role": "Super Admin" })).into_response()
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/locations", get(list_locations).post(create_location))
        .route(
            "/locations/{key}",
            get(find_location)
                .patch(update_location)
                .delete(delete_location),
        )
        .route(
            "/job-types",
            get(|| async { api_error(StatusCode::NOT_FOUND, "NOT_FOUND", "no job types") })
                .post(|| async {
                    api_error(StatusCode::CONFLICT, "DUPLICATE", "job type already exists")
                }),
        )
        .route(
            "/product-groups",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/users",
            get(|| async {
                envelope(json!([
                    { "id": 1, "email": "admin@lp.vn", "role": "super admin", "isActive": true },
                    { "id": "u2", "email": "hr@lp.vn", "role": "Admin" },
                    { "id": "u3", "email": "not-an-email" },
                ]))
            }),
        )
        .route(
            "/recruitment-posts",
            get(|| async {
                envelope(json!([
                    { "id": 7, "slug": "thu-ngan", "title": "Thu ngân", "description": "Ca sáng", "status": "published", "locationName": "Hà Nội" },
                    { "id": 8, "title": "Kho vận", "description": "Ca tối", "salaryCurrency": "USD" },
                ]))
            }),
        )
        .route(
            "/admin/dashboard",
            get(|| async {
                Json(json!({ "apiHealth": { "uptime": 97.0, "avgLatency": 250.0, "errorRate": 1.5 } }))
            }),
        )
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/change-password", post(change_password))
        .with_state(backend)
}

fn rest_services(base_url: &str, tokens: Arc<dyn TokenProvider>) -> ApplicationServices {
    let client = ApiClient::new(base_url, reqwest::Client::new(), Arc::clone(&tokens));
    ApplicationServices::new(
        Repositories {
            catalog: Arc::new(RestCatalogRepository::new(client.clone())),
            posts: Arc::new(RestRecruitmentPostRepository::new(client.clone())),
            users: Arc::new(RestUserRepository::new(client.clone())),
            dashboard: Some(Arc::new(RestDashboardRepository::new(client))),
        },
        tokens,
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
        None,
        50,
    )
}

fn static_token(token: Option<&str>) -> Arc<dyn TokenProvider> {
    Arc::new(StaticTokenProvider::new(token.map(str::to_string)))
}

#[tokio::test]
async fn catalog_round_trip_against_rest_backend() {
    let backend = Backend::default().with_location(1, "Y tế", "y-te");
    let base = spawn_backend(router(backend.clone())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));
    let kind = CatalogKind::Location;

    let created = services
        .catalog_commands
        .create(
            CreateCatalogEntityCommand::builder(kind)
                .name("Y Tế")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.slug, "y-te-2");
    assert_eq!(created.id, "101");

    let state = services.catalog_queries.list(kind).await;
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 2);

    let toggled = services
        .catalog_commands
        .toggle_status_by_slug(kind, "y-te")
        .await
        .unwrap();
    assert_eq!(toggled.status, EntityStatus::Disabled);
    assert_eq!(backend.locations.lock().unwrap()[0]["status"], "Disabled");

    let deleted = services
        .catalog_commands
        .delete(DeleteCatalogEntitiesCommand {
            kind,
            slugs: vec!["y-te-2".into()],
        })
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let state = services.catalog_queries.list(kind).await;
    let slugs: Vec<_> = state.items.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, ["y-te"]);
}

#[tokio::test]
async fn slugs_are_sent_as_single_path_segments() {
    let backend = Backend::default()
        .with_location(1, "Hà Nội", "ha-noi")
        .with_location(2, "Kho?", "kho?a#b");
    let base = spawn_backend(router(backend.clone())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));
    let kind = CatalogKind::Location;

    // Resolves under /locations instead of escaping to /users/1.
    let err = services
        .catalog_commands
        .delete(DeleteCatalogEntitiesCommand {
            kind,
            slugs: vec!["../users/1".into()],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
    assert_eq!(backend.locations.lock().unwrap().len(), 2);

    let err = services
        .catalog_commands
        .delete(DeleteCatalogEntitiesCommand {
            kind,
            slugs: vec!["..".into()],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "{err:?}");

    let deleted = services
        .catalog_commands
        .delete(DeleteCatalogEntitiesCommand {
            kind,
            slugs: vec!["kho?a#b".into()],
        })
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    let remaining = backend.locations.lock().unwrap().clone();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["slug"], "ha-noi");
}

#[tokio::test]
async fn missing_token_is_reported_as_unauthorized() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(None));

    let state = services.catalog_queries.list(CatalogKind::Location).await;
    assert!(state.items.is_empty());
    match state.error {
        Some(ApplicationError::Unauthorized(msg)) => {
            assert_eq!(msg, "missing or invalid token");
        }
        other => panic!("unexpected state error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_collection_reads_as_empty() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let state = services.catalog_queries.list(CatalogKind::JobType).await;
    assert!(state.error.is_none());
    assert!(state.items.is_empty());
}

#[tokio::test]
async fn duplicate_insert_maps_to_conflict() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let err = services
        .catalog_commands
        .create(
            CreateCatalogEntityCommand::builder(CatalogKind::JobType)
                .name("Toàn thời gian")
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(msg) if msg == "job type already exists"));
}

#[tokio::test]
async fn server_error_without_envelope_is_infrastructure_failure() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let state = services.catalog_queries.list(CatalogKind::ProductGroup).await;
    assert!(matches!(
        state.error,
        Some(ApplicationError::Infrastructure(ref msg)) if msg.contains("500")
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on port 9 of the loopback interface.
    let services = rest_services("http://127.0.0.1:9", static_token(Some(TOKEN)));
    let state = services.catalog_queries.list(CatalogKind::Location).await;
    assert!(matches!(state.error, Some(ApplicationError::Network(_))));
}

#[tokio::test]
async fn malformed_rows_are_skipped() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let users = services.user_queries.list().await.into_result().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id.as_str(), "1");
    assert_eq!(users[0].role, Role::SuperAdmin);
    assert!(users[1].is_active);
}

#[tokio::test]
async fn posts_without_slug_fall_back_to_id() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let posts = services
        .recruitment_queries
        .list_by_status(None)
        .await
        .unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].location.as_deref(), Some("Hà Nội"));
    assert_eq!(posts[1].slug, "8");
    assert_eq!(posts[1].salary_currency, "USD");
}

#[tokio::test]
async fn dashboard_merges_partial_payload() {
    let base = spawn_backend(router(Backend::default())).await;
    let services = rest_services(&base, static_token(Some(TOKEN)));

    let view = services.dashboard_queries.load().await;
    assert!(!view.is_fallback);
    assert!(view.error.is_none());
    assert_eq!(view.data.api_health.uptime, 97.0);
    assert_eq!(view.data.stats.len(), 4);
}

#[tokio::test]
async fn session_signs_in_once_and_again_after_sign_out() {
    let backend = Backend::default().with_location(1, "Huế", "hue");
    let base = spawn_backend(router(backend.clone())).await;
    let tokens: Arc<dyn TokenProvider> = Arc::new(SessionTokenProvider::new(
        &base,
        reqwest::Client::new(),
        Credentials {
            email: ADMIN_EMAIL.into(),
            password: ADMIN_PASSWORD.into(),
        },
    ));
    let services = rest_services(&base, tokens);

    let state = services.catalog_queries.list(CatalogKind::Location).await;
    assert_eq!(state.items.len(), 1);
    services.catalog_queries.refresh(CatalogKind::Location).await;
    assert_eq!(backend.sign_ins.load(Ordering::SeqCst), 1);

    services.sign_out().await;
    let state = services.catalog_queries.list(CatalogKind::Location).await;
    assert!(state.error.is_none());
    assert_eq!(backend.sign_ins.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rejected_credentials_are_unauthorized() {
    let backend = Backend::default();
    let base = spawn_backend(router(backend.clone())).await;
    let tokens: Arc<dyn TokenProvider> = Arc::new(SessionTokenProvider::new(
        &base,
        reqwest::Client::new(),
        Credentials {
            email: ADMIN_EMAIL.into(),
            password: "wrong".into(),
        },
    ));

    let err = tokens.token().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(backend.sign_ins.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn change_password_requires_a_token() {
    let backend = Backend::default();
    let base = spawn_backend(router(backend.clone())).await;

    let anonymous = rest_services(&base, static_token(None));
    let err = anonymous
        .user_commands
        .change_password(ChangePasswordCommand {
            old_password: ADMIN_PASSWORD.into(),
            new_password: "Lp-Tuyen#Dung2025".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(backend.password_calls.load(Ordering::SeqCst), 0);

    let signed_in = rest_services(&base, static_token(Some(TOKEN)));
    let changed = signed_in
        .user_commands
        .change_password(ChangePasswordCommand {
            old_password: ADMIN_PASSWORD.into(),
            new_password: "Lp-Tuyen#Dung2025".into(),
        })
        .await
        .unwrap();
    assert_eq!(changed.user.email, ADMIN_EMAIL);
    assert_eq!(backend.password_calls.load(Ordering::SeqCst), 1);
}
