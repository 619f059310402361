use crate::domain::catalog::{EntityId, EntitySlug};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const DEFAULT_SALARY_CURRENCY: &str = "VND";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Closed,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "closed" => Ok(PostStatus::Closed),
            other => Err(DomainError::Validation(format!(
                "unknown post status '{other}'"
            ))),
        }
    }
}

/// Editable content of a recruitment post, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostContent {
    pub title: String,
    pub description: String,
    pub introduce: Option<String>,
    pub location_id: Option<EntityId>,
    pub job_category_id: Option<EntityId>,
    pub job_type_id: Option<EntityId>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub salary_currency: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: PostStatus,
}

impl PostContent {
    /// Trims the required fields, turns blank optionals into `None` and
    /// checks the salary range. A zero salary counts as unset.
    pub fn normalized(mut self) -> DomainResult<Self> {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();

        if self.title.is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if self.description.is_empty() {
            return Err(DomainError::validation("description is required"));
        }

        self.introduce = non_blank(self.introduce);
        self.requirements = non_blank(self.requirements);
        self.benefits = non_blank(self.benefits);
        self.salary_min = self.salary_min.filter(|v| *v > 0);
        self.salary_max = self.salary_max.filter(|v| *v > 0);
        if self.salary_currency.trim().is_empty() {
            self.salary_currency = DEFAULT_SALARY_CURRENCY.to_string();
        }

        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(DomainError::validation(
                    "maximum salary must be greater than minimum salary",
                ));
            }
        }

        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecruitmentPost {
    pub id: EntityId,
    pub slug: EntitySlug,
    pub content: PostContent,
    pub location_name: Option<String>,
    pub job_category_name: Option<String>,
    pub job_type_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewRecruitmentPost {
    pub slug: EntitySlug,
    pub content: PostContent,
}

#[derive(Debug, Clone)]
pub struct RecruitmentPostUpdate {
    pub id: EntityId,
    pub slug: EntitySlug,
    pub content: PostContent,
}
