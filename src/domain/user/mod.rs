// src/domain/user/mod.rs
pub mod entity;
pub mod password_strength;
pub mod repository;
pub mod value_objects;

pub use entity::{DEFAULT_INITIAL_PASSWORD, NewUser, PasswordChange, User};
pub use password_strength::{PasswordStrength, PasswordStrengthReport, evaluate_password};
pub use repository::UserRepository;
pub use value_objects::{Email, Role, UserId};
