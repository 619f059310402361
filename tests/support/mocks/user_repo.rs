// tests/support/mocks/user_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use recruit_admin_core::domain::errors::{DomainError, DomainResult};
use recruit_admin_core::domain::user::{
    Email, NewUser, PasswordChange, Role, User, UserId, UserRepository,
};

/// Accounts plus the password of the signed-in one.
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    passwords: Mutex<Vec<(String, String)>>,
    current: String,
    inserts: AtomicUsize,
}

impl InMemoryUserRepo {
    /// `current` is the email the change-password calls act on.
    pub fn new(current: &str, password: &str) -> Self {
        let repo = Self {
            users: Mutex::new(Vec::new()),
            passwords: Mutex::new(Vec::new()),
            current: current.to_string(),
            inserts: AtomicUsize::new(0),
        };
        repo.seed(current, Role::SuperAdmin, password);
        repo
    }

    pub fn seed(&self, email: &str, role: Role, password: &str) -> User {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: UserId::new(format!("u{}", users.len() + 1)).unwrap(),
            email: Email::new(email).unwrap(),
            role,
            is_active: true,
            created_at: None,
        };
        users.push(user.clone());
        self.passwords
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        user
    }

    pub fn password_of(&self, email: &str) -> Option<String> {
        self.passwords
            .lock()
            .unwrap()
            .iter()
            .find(|(owner, _)| owner == email)
            .map(|(_, password)| password.clone())
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        if self.password_of(new_user.email.as_str()).is_some() {
            return Err(DomainError::Conflict(format!(
                "email '{}' already registered",
                new_user.email
            )));
        }
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(self.seed(new_user.email.as_str(), new_user.role, &new_user.password))
    }

    async fn change_password(&self, change: PasswordChange) -> DomainResult<User> {
        {
            let mut passwords = self.passwords.lock().unwrap();
            let entry = passwords
                .iter_mut()
                .find(|(owner, _)| *owner == self.current)
                .ok_or_else(|| DomainError::Unauthorized("not signed in".into()))?;
            if entry.1 != change.old_password {
                return Err(DomainError::Validation("current password is incorrect".into()));
            }
            entry.1 = change.new_password;
        }

        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email.as_str() == self.current)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("current user".into()))
    }
}
