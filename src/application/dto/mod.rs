pub mod catalog;
pub mod recruitment;
pub mod users;

pub use catalog::CatalogEntityDto;
pub use recruitment::RecruitmentPostDto;
pub use users::{PasswordChangedDto, UserDto};
