// src/infrastructure/repositories/mod.rs
mod airtable_catalog;
mod rest_catalog;
mod rest_dashboard;
mod rest_posts;
mod rest_users;
mod wire;

pub use airtable_catalog::{AirtableCatalogRepository, AirtableTables};
pub use rest_catalog::RestCatalogRepository;
pub use rest_dashboard::RestDashboardRepository;
pub use rest_posts::RestRecruitmentPostRepository;
pub use rest_users::RestUserRepository;
