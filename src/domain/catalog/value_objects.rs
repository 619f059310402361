use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Server-assigned identifier. Opaque to the client (REST ids and Airtable
/// `rec…` ids alike).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("id cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityName(String);

impl EntityName {
    /// Trims surrounding whitespace; blank names are rejected.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityName> for String {
    fn from(value: EntityName) -> Self {
        value.0
    }
}

/// URL-safe key: lowercase ASCII alphanumeric runs joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntitySlug(String);

impl EntitySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must be lowercase kebab-case"
            )));
        }
        Ok(Self(value))
    }

    /// Accepts any non-blank slug as stored by a backend. Records created
    /// outside this client are not guaranteed to be kebab-case.
    pub fn from_remote(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntitySlug> for String {
    fn from(value: EntitySlug) -> Self {
        value.0
    }
}

pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityStatus {
    #[default]
    Active,
    Disabled,
}

impl EntityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Disabled => "Disabled",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Disabled,
            EntityStatus::Disabled => EntityStatus::Active,
        }
    }

    /// Lenient decoding of backend values: missing means active and the
    /// lowercase spellings are accepted.
    pub fn from_remote(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("Disabled") | Some("disabled") => EntityStatus::Disabled,
            _ => EntityStatus::Active,
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" | "active" => Ok(EntityStatus::Active),
            "Disabled" | "disabled" => Ok(EntityStatus::Disabled),
            other => Err(DomainError::Validation(format!("unknown status '{other}'"))),
        }
    }
}

/// The four sluggable, status-toggleable collections managed by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Location,
    JobCategory,
    JobType,
    ProductGroup,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Location,
        CatalogKind::JobCategory,
        CatalogKind::JobType,
        CatalogKind::ProductGroup,
    ];

    /// Path segment on the REST backend.
    pub fn resource(&self) -> &'static str {
        match self {
            CatalogKind::Location => "locations",
            CatalogKind::JobCategory => "job-categories",
            CatalogKind::JobType => "job-types",
            CatalogKind::ProductGroup => "product-groups",
        }
    }

    pub fn default_table(&self) -> &'static str {
        match self {
            CatalogKind::Location => "Locations",
            CatalogKind::JobCategory => "Job Categories",
            CatalogKind::JobType => "Job Types",
            CatalogKind::ProductGroup => "Product Groups",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogKind::Location => "location",
            CatalogKind::JobCategory => "job category",
            CatalogKind::JobType => "job type",
            CatalogKind::ProductGroup => "product group",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

impl FromStr for CatalogKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.resource() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown collection '{s}'")))
    }
}
