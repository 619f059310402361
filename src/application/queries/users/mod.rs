mod list;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
