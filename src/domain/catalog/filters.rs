use crate::domain::catalog::entity::CatalogEntity;
use crate::domain::catalog::value_objects::EntityStatus;
use crate::domain::errors::DomainError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EntityStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: EntityStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

/// Search box plus status dropdown of a list screen.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl CatalogFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, entity: &CatalogEntity) -> bool {
        self.matches_search(entity) && self.status.matches(entity.status)
    }

    fn matches_search(&self, entity: &CatalogEntity) -> bool {
        let query = self.search.trim();
        if query.is_empty() {
            return true;
        }
        entity
            .name
            .as_str()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    pub fn apply<'a, I>(&self, entities: I) -> Vec<CatalogEntity>
    where
        I: IntoIterator<Item = &'a CatalogEntity>,
    {
        entities
            .into_iter()
            .filter(|entity| self.matches(entity))
            .cloned()
            .collect()
    }
}
