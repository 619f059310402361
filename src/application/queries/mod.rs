pub mod catalog;
pub mod dashboard;
pub mod recruitment;
pub mod users;
