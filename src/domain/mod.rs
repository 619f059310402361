pub mod catalog;
pub mod dashboard;
pub mod errors;
pub mod recruitment;
pub mod slug;
pub mod user;
