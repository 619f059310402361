// src/infrastructure/repositories/rest_posts.rs
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::wire::{RemoteId, decode_rows};
use crate::domain::catalog::{EntityId, EntitySlug};
use crate::domain::errors::DomainResult;
use crate::domain::recruitment::{
    DEFAULT_SALARY_CURRENCY, NewRecruitmentPost, PostContent, PostStatus, RecruitmentPost,
    RecruitmentPostRepository, RecruitmentPostUpdate,
};
use crate::infrastructure::http::ApiClient;

const RESOURCE: &str = "recruitment-posts";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostRecord {
    id: RemoteId,
    #[serde(default)]
    slug: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    introduce: Option<String>,
    location_id: Option<RemoteId>,
    location_name: Option<String>,
    job_category_id: Option<RemoteId>,
    job_category_name: Option<String>,
    job_type_id: Option<RemoteId>,
    job_type_name: Option<String>,
    salary_min: Option<u64>,
    salary_max: Option<u64>,
    salary_currency: Option<String>,
    requirements: Option<String>,
    benefits: Option<String>,
    deadline: Option<NaiveDate>,
    #[serde(default)]
    status: PostStatus,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

fn remote_entity_id(id: Option<RemoteId>) -> DomainResult<Option<EntityId>> {
    id.map(|id| EntityId::new(id.to_string())).transpose()
}

impl PostRecord {
    fn into_post(self) -> DomainResult<RecruitmentPost> {
        let id = EntityId::new(self.id.to_string())?;
        // Older records carry no slug; their id doubles as the key.
        let slug = match self.slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => EntitySlug::from_remote(slug)?,
            None => EntitySlug::from_remote(id.as_str())?,
        };

        Ok(RecruitmentPost {
            id,
            slug,
            content: PostContent {
                title: self.title,
                description: self.description,
                introduce: self.introduce,
                location_id: remote_entity_id(self.location_id)?,
                job_category_id: remote_entity_id(self.job_category_id)?,
                job_type_id: remote_entity_id(self.job_type_id)?,
                salary_min: self.salary_min,
                salary_max: self.salary_max,
                salary_currency: self
                    .salary_currency
                    .unwrap_or_else(|| DEFAULT_SALARY_CURRENCY.to_string()),
                requirements: self.requirements,
                benefits: self.benefits,
                deadline: self.deadline,
                status: self.status,
            },
            location_name: self.location_name,
            job_category_name: self.job_category_name,
            job_type_name: self.job_type_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostBody<'a> {
    slug: &'a str,
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    introduce: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_category_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_type_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary_max: Option<u64>,
    salary_currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benefits: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<NaiveDate>,
    status: PostStatus,
}

impl<'a> PostBody<'a> {
    fn new(slug: &'a EntitySlug, content: &'a PostContent) -> Self {
        Self {
            slug: slug.as_str(),
            title: &content.title,
            description: &content.description,
            introduce: content.introduce.as_deref(),
            location_id: content.location_id.as_ref().map(EntityId::as_str),
            job_category_id: content.job_category_id.as_ref().map(EntityId::as_str),
            job_type_id: content.job_type_id.as_ref().map(EntityId::as_str),
            salary_min: content.salary_min,
            salary_max: content.salary_max,
            salary_currency: &content.salary_currency,
            requirements: content.requirements.as_deref(),
            benefits: content.benefits.as_deref(),
            deadline: content.deadline,
            status: content.status,
        }
    }
}

#[derive(Clone)]
pub struct RestRecruitmentPostRepository {
    client: ApiClient,
}

impl RestRecruitmentPostRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecruitmentPostRepository for RestRecruitmentPostRepository {
    async fn list(&self) -> DomainResult<Vec<RecruitmentPost>> {
        let rows: Vec<PostRecord> = self.client.get_optional(&[RESOURCE]).await?.unwrap_or_default();
        Ok(decode_rows(RESOURCE, rows, PostRecord::into_post))
    }

    async fn find_by_slug(&self, slug: &EntitySlug) -> DomainResult<Option<RecruitmentPost>> {
        let row: Option<PostRecord> = self
            .client
            .get_optional(&[RESOURCE, slug.as_str()])
            .await?;
        row.map(PostRecord::into_post).transpose()
    }

    async fn insert(&self, post: NewRecruitmentPost) -> DomainResult<RecruitmentPost> {
        let body = PostBody::new(&post.slug, &post.content);
        let row: PostRecord = self.client.post(&[RESOURCE], &body).await?;
        row.into_post()
    }

    async fn update(&self, update: RecruitmentPostUpdate) -> DomainResult<RecruitmentPost> {
        let body = PostBody::new(&update.slug, &update.content);
        let row: PostRecord = self
            .client
            .patch(&[RESOURCE, update.id.as_str()], &body)
            .await?;
        row.into_post()
    }

    async fn delete(&self, slug: &EntitySlug) -> DomainResult<()> {
        self.client.delete(&[RESOURCE, slug.as_str()]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_slug_uses_id() {
        let record: PostRecord = serde_json::from_str(
            r#"{"id":17,"title":"Dược sĩ","description":"x","status":"published","locationId":"loc1","locationName":"Hà Nội"}"#,
        )
        .unwrap();
        let post = record.into_post().unwrap();
        assert_eq!(post.slug.as_str(), "17");
        assert_eq!(post.content.salary_currency, "VND");
        assert_eq!(post.content.status, PostStatus::Published);
        assert_eq!(post.location_name.as_deref(), Some("Hà Nội"));
    }

    #[test]
    fn body_is_camel_case_without_blank_optionals() {
        let slug = EntitySlug::new("duoc-si").unwrap();
        let content = PostContent {
            title: "Dược sĩ".into(),
            description: "x".into(),
            salary_min: Some(10),
            salary_currency: "VND".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(PostBody::new(&slug, &content)).unwrap();
        assert_eq!(json["salaryMin"], 10);
        assert_eq!(json["status"], "draft");
        assert!(json.get("salaryMax").is_none());
        assert!(json.get("locationId").is_none());
    }
}
