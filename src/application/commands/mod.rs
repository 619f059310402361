pub mod catalog;
pub mod recruitment;
pub mod users;
