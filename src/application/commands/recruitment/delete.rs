// src/application/commands/recruitment/delete.rs
use super::RecruitmentCommandService;
use crate::{application::error::ApplicationResult, domain::catalog::EntitySlug};

pub struct DeleteRecruitmentPostCommand {
    pub slug: String,
}

impl RecruitmentCommandService {
    pub async fn delete(&self, command: DeleteRecruitmentPostCommand) -> ApplicationResult<()> {
        let slug = EntitySlug::from_remote(command.slug)?;
        let result = self.repo.delete(&slug).await;
        self.cache.invalidate().await;
        result?;
        tracing::info!(slug = %slug, "recruitment post deleted");
        Ok(())
    }
}
