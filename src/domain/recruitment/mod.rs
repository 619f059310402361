pub mod entity;
pub mod repository;

pub use entity::{
    NewRecruitmentPost, PostContent, PostStatus, RecruitmentPost, RecruitmentPostUpdate,
    DEFAULT_SALARY_CURRENCY,
};
pub use repository::RecruitmentPostRepository;
