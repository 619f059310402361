// src/application/commands/recruitment/update.rs
use super::{RecruitmentCommandService, create::RecruitmentPostForm};
use crate::{
    application::{
        dto::RecruitmentPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        catalog::EntitySlug,
        recruitment::RecruitmentPostUpdate,
        slug::PostSlugProbe,
    },
};

pub struct UpdateRecruitmentPostCommand {
    pub slug: String,
    pub form: RecruitmentPostForm,
}

impl RecruitmentCommandService {
    /// Replaces the post content. The slug only changes with the title.
    pub async fn update(
        &self,
        command: UpdateRecruitmentPostCommand,
    ) -> ApplicationResult<RecruitmentPostDto> {
        let slug = EntitySlug::from_remote(command.slug)?;
        let current = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("post '{slug}' not found")))?;

        let content = command.form.into_content()?;
        let probe = PostSlugProbe::new(self.repo.as_ref());
        let new_slug = self
            .slug_service
            .slug_for_rename(&current.content.title, &current.slug, &content.title, &probe)
            .await?;

        let updated = self
            .repo
            .update(RecruitmentPostUpdate {
                id: current.id,
                slug: new_slug,
                content,
            })
            .await?;
        self.cache.invalidate().await;
        tracing::info!(slug = %updated.slug, "recruitment post updated");
        Ok(updated.into())
    }
}
