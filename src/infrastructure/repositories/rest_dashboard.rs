// src/infrastructure/repositories/rest_dashboard.rs
use async_trait::async_trait;

use crate::domain::dashboard::{DashboardRepository, PartialDashboard};
use crate::domain::errors::DomainResult;
use crate::infrastructure::http::ApiClient;

/// `GET /admin/dashboard`, answered without the usual envelope.
#[derive(Clone)]
pub struct RestDashboardRepository {
    client: ApiClient,
}

impl RestDashboardRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for RestDashboardRepository {
    async fn fetch(&self) -> DomainResult<PartialDashboard> {
        self.client.get_bare(&["admin", "dashboard"]).await
    }
}
