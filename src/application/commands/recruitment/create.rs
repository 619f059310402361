// src/application/commands/recruitment/create.rs
use chrono::NaiveDate;

use super::RecruitmentCommandService;
use crate::{
    application::{dto::RecruitmentPostDto, error::ApplicationResult},
    domain::{
        catalog::EntityId,
        errors::DomainResult,
        recruitment::{NewRecruitmentPost, PostContent, PostStatus},
        slug::PostSlugProbe,
    },
};

/// Raw form input for a recruitment post.
#[derive(Debug, Clone, Default)]
pub struct RecruitmentPostForm {
    pub title: String,
    pub description: String,
    pub introduce: Option<String>,
    pub location_id: Option<String>,
    pub job_category_id: Option<String>,
    pub job_type_id: Option<String>,
    pub salary_min: Option<u64>,
    pub salary_max: Option<u64>,
    pub salary_currency: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub status: PostStatus,
}

impl RecruitmentPostForm {
    pub(super) fn into_content(self) -> DomainResult<PostContent> {
        PostContent {
            title: self.title,
            description: self.description,
            introduce: self.introduce,
            location_id: optional_id(self.location_id)?,
            job_category_id: optional_id(self.job_category_id)?,
            job_type_id: optional_id(self.job_type_id)?,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            salary_currency: self.salary_currency.unwrap_or_default(),
            requirements: self.requirements,
            benefits: self.benefits,
            deadline: self.deadline,
            status: self.status,
        }
        .normalized()
    }
}

fn optional_id(value: Option<String>) -> DomainResult<Option<EntityId>> {
    match value {
        Some(id) if !id.trim().is_empty() => Ok(Some(EntityId::new(id.trim())?)),
        _ => Ok(None),
    }
}

pub struct CreateRecruitmentPostCommand {
    pub form: RecruitmentPostForm,
}

impl RecruitmentCommandService {
    pub async fn create(
        &self,
        command: CreateRecruitmentPostCommand,
    ) -> ApplicationResult<RecruitmentPostDto> {
        let content = command.form.into_content()?;

        let probe = PostSlugProbe::new(self.repo.as_ref());
        let slug = self
            .slug_service
            .generate_unique_slug(&content.title, &probe)
            .await?;

        let created = self.repo.insert(NewRecruitmentPost { slug, content }).await?;
        self.cache.invalidate().await;
        tracing::info!(slug = %created.slug, status = %created.content.status, "recruitment post created");
        Ok(created.into())
    }
}
