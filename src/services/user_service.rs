//! User service - profile CRUD on top of the shared lifecycle.

use async_trait::async_trait;
use validator::ValidateEmail;

use super::Lifecycle;
use crate::config::MIN_PASSWORD_LENGTH;
use crate::domain::{CreateUser, Password, UpdateUser, User, UserDraft, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// Every operation only sees active users.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<User>>;

    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Create a user with a full profile
    async fn create_user(&self, body: CreateUser) -> AppResult<User>;

    /// Update a user; the credential is re-hashed every time
    async fn update_user(&self, id: i32, body: UpdateUser) -> AppResult<User>;

    /// Soft delete, returning the user as it was
    async fn delete_user(&self, id: i32) -> AppResult<User>;
}

/// Email format and password length rules applied before any user write.
pub(crate) fn check_credentials(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::validation("email is required"));
    }
    if !email.validate_email() {
        return Err(AppError::validation("invalid email format"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Lifecycle<dyn UserRepository>,
}

impl UserManager {
    pub fn new(users: Lifecycle<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.get(id).await
    }

    async fn create_user(&self, body: CreateUser) -> AppResult<User> {
        check_credentials(&body.email, &body.password)?;

        self.users
            .create(body.email.clone(), move || {
                let password_hash = Password::hash(&body.password)?.into_string();
                Ok(UserDraft {
                    first_name: body.first_name,
                    last_name: body.last_name,
                    email: body.email,
                    password_hash,
                    role: body.role,
                    phone_number: body.phone_number,
                    position_name: body.position_name,
                    company: body.company,
                    company_id: body.company_id,
                    position_id: body.position_id,
                })
            })
            .await
    }

    async fn update_user(&self, id: i32, body: UpdateUser) -> AppResult<User> {
        check_credentials(&body.email, &body.password)?;

        let email = body.email.clone();
        self.users
            .update(id, move |_| email, move || {
                let password_hash = Password::hash(&body.password)?.into_string();
                Ok(UserPatch::from_update(body, password_hash))
            })
            .await
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        self.users.delete(id).await
    }
}
