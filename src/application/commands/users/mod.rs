mod change_password;
mod create;
mod service;

pub use change_password::ChangePasswordCommand;
pub use create::CreateUserCommand;
pub use service::UserCommandService;
