mod client;
pub mod envelope;
pub mod error;

pub use client::{ApiClient, build_http_client};
