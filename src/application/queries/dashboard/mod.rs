mod service;

pub use service::{DashboardQueryService, DashboardView};
