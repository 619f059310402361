// src/application/commands/recruitment/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateRecruitmentPostCommand, RecruitmentPostForm};
pub use delete::DeleteRecruitmentPostCommand;
pub use service::RecruitmentCommandService;
pub use update::UpdateRecruitmentPostCommand;
