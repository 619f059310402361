use crate::domain::recruitment::{PostStatus, RecruitmentPost};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentPostDto {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    pub salary_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<RecruitmentPost> for RecruitmentPostDto {
    fn from(post: RecruitmentPost) -> Self {
        let content = post.content;
        // Prefer the display names the backend joins in; fall back to ids.
        let location = post
            .location_name
            .or_else(|| content.location_id.map(String::from));
        let job_category = post
            .job_category_name
            .or_else(|| content.job_category_id.map(String::from));
        let job_type = post
            .job_type_name
            .or_else(|| content.job_type_id.map(String::from));

        Self {
            id: post.id.into(),
            slug: post.slug.into(),
            title: content.title,
            description: content.description,
            introduce: content.introduce,
            location,
            job_category,
            job_type,
            salary_min: content.salary_min,
            salary_max: content.salary_max,
            salary_currency: content.salary_currency,
            deadline: content.deadline,
            status: content.status,
            created_at: post.created_at,
        }
    }
}
