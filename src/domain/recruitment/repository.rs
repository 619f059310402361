use crate::domain::catalog::EntitySlug;
use crate::domain::errors::DomainResult;
use crate::domain::recruitment::entity::{
    NewRecruitmentPost, RecruitmentPost, RecruitmentPostUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait RecruitmentPostRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<RecruitmentPost>>;
    async fn find_by_slug(&self, slug: &EntitySlug) -> DomainResult<Option<RecruitmentPost>>;
    async fn insert(&self, post: NewRecruitmentPost) -> DomainResult<RecruitmentPost>;
    async fn update(&self, update: RecruitmentPostUpdate) -> DomainResult<RecruitmentPost>;
    async fn delete(&self, slug: &EntitySlug) -> DomainResult<()>;
}
