// src/infrastructure/security/mod.rs
pub mod token;

pub use token::{Credentials, SessionTokenProvider, StaticTokenProvider};
