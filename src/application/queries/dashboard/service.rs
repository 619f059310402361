use std::sync::Arc;

use serde::Serialize;

use crate::application::error::ApplicationError;
use crate::domain::dashboard::{DashboardData, DashboardRepository};

/// What the overview screen renders. `error` is set when the backend call
/// failed and the fallback snapshot was used instead.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub data: DashboardData,
    pub is_fallback: bool,
    #[serde(skip)]
    pub error: Option<ApplicationError>,
}

pub struct DashboardQueryService {
    source: Option<Arc<dyn DashboardRepository>>,
}

impl DashboardQueryService {
    /// `None` when no API is configured; every load then yields the fallback.
    pub fn new(source: Option<Arc<dyn DashboardRepository>>) -> Self {
        Self { source }
    }

    pub async fn load(&self) -> DashboardView {
        let Some(source) = &self.source else {
            tracing::warn!("dashboard API not configured, using fallback data");
            return DashboardView {
                data: DashboardData::fallback(),
                is_fallback: true,
                error: None,
            };
        };

        match source.fetch().await {
            Ok(partial) => DashboardView {
                data: DashboardData::fallback().merged_with(partial),
                is_fallback: false,
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "dashboard fetch failed, using fallback data");
                DashboardView {
                    data: DashboardData::fallback(),
                    is_fallback: true,
                    error: Some(err.into()),
                }
            }
        }
    }
}
