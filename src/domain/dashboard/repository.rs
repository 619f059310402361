use super::PartialDashboard;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn fetch(&self) -> DomainResult<PartialDashboard>;
}
