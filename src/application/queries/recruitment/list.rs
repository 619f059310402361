use super::RecruitmentQueryService;
use crate::{
    application::{
        cache::ListState,
        dto::RecruitmentPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::recruitment::{PostStatus, RecruitmentPost},
};

impl RecruitmentQueryService {
    pub async fn list(&self) -> ListState<RecruitmentPost> {
        self.cache.read().await
    }

    pub async fn list_by_status(
        &self,
        status: Option<PostStatus>,
    ) -> ApplicationResult<Vec<RecruitmentPostDto>> {
        let posts = self.cache.items().await?;
        Ok(posts
            .iter()
            .filter(|post| status.is_none_or(|status| post.content.status == status))
            .cloned()
            .map(Into::into)
            .collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> ApplicationResult<RecruitmentPostDto> {
        let posts = self.cache.items().await?;
        posts
            .iter()
            .find(|post| post.slug.as_str() == slug)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("post '{slug}' not found")))
    }
}
