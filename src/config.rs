// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

use crate::domain::catalog::CatalogKind;
use crate::domain::slug::DEFAULT_MAX_ATTEMPTS;
use crate::infrastructure::airtable::DEFAULT_API_URL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AirtableConfig {
    pub api_url: String,
    pub base_id: String,
    pub token: String,
    pub tables: Vec<(CatalogKind, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogBackend {
    Rest,
    Airtable(AirtableConfig),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    api_base_url: Option<String>,
    api_token: Option<String>,
    admin_credentials: Option<(String, String)>,
    catalog_backend: CatalogBackend,
    http_timeout: Duration,
    cache_ttl: Option<Duration>,
    slug_max_attempts: u32,
    search_debounce: Duration,
}

fn default_http_timeout_secs() -> u64 {
    15
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn table_key(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Location => "AIRTABLE_LOCATIONS_TABLE",
        CatalogKind::JobCategory => "AIRTABLE_JOB_CATEGORIES_TABLE",
        CatalogKind::JobType => "AIRTABLE_JOB_TYPES_TABLE",
        CatalogKind::ProductGroup => "AIRTABLE_PRODUCT_GROUPS_TABLE",
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value.trim().parse::<T>().map_err(|_| {
            ConfigError::Invalid(format!(
                "{key} must be a non-negative integer, got '{value}'"
            ))
        })
    })
    .transpose()
}

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key source.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = get("API_BASE_URL").map(|url| url.trim_end_matches('/').to_string());
        let api_token = get("API_TOKEN");

        let admin_credentials = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        };

        let catalog_backend = match get("CATALOG_BACKEND").as_deref().map(str::trim) {
            None | Some("rest") => CatalogBackend::Rest,
            Some("airtable") => {
                let base_id =
                    get("AIRTABLE_BASE_ID").ok_or(ConfigError::Missing("AIRTABLE_BASE_ID"))?;
                let token =
                    get("AIRTABLE_TOKEN").ok_or(ConfigError::Missing("AIRTABLE_TOKEN"))?;
                let tables = CatalogKind::ALL
                    .into_iter()
                    .filter_map(|kind| get(table_key(kind)).map(|table| (kind, table)))
                    .collect();
                CatalogBackend::Airtable(AirtableConfig {
                    api_url: get("AIRTABLE_API_URL")
                        .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                    base_id,
                    token,
                    tables,
                })
            }
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "CATALOG_BACKEND must be 'rest' or 'airtable', got '{other}'"
                )));
            }
        };

        let number = |key: &'static str| parse_number::<u64>(key, get(key));

        let http_timeout_secs =
            number("HTTP_TIMEOUT_SECONDS")?.unwrap_or_else(default_http_timeout_secs);
        let cache_ttl = number("CACHE_TTL_SECONDS")?.map(Duration::from_secs);
        let slug_max_attempts =
            parse_number::<u32>("SLUG_MAX_ATTEMPTS", get("SLUG_MAX_ATTEMPTS"))?
                .unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if slug_max_attempts == 0 {
            return Err(ConfigError::Invalid("SLUG_MAX_ATTEMPTS must be at least 1".into()));
        }
        let search_debounce_ms =
            number("SEARCH_DEBOUNCE_MS")?.unwrap_or_else(default_search_debounce_ms);

        Ok(Self {
            api_base_url,
            api_token,
            admin_credentials,
            catalog_backend,
            http_timeout: Duration::from_secs(http_timeout_secs),
            cache_ttl,
            slug_max_attempts,
            search_debounce: Duration::from_millis(search_debounce_ms),
        })
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    /// The REST API is needed by everything except the dashboard.
    pub fn require_api_base_url(&self) -> Result<&str, ConfigError> {
        self.api_base_url().ok_or(ConfigError::Missing("API_BASE_URL"))
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// `(email, password)` for signing in when no static token is set.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        self.admin_credentials
            .as_ref()
            .map(|(email, password)| (email.as_str(), password.as_str()))
    }

    pub fn catalog_backend(&self) -> &CatalogBackend {
        &self.catalog_backend
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    /// `None` keeps cached collections until they are invalidated.
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl
    }

    pub fn slug_max_attempts(&self) -> u32 {
        self.slug_max_attempts
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce
    }
}
