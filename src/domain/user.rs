//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::Resource;
use crate::config::RESOURCE_USER;

/// User domain entity
///
/// `company` and `position_name` are display strings; `company_id` and
/// `position_id` are the references checked before a company or position
/// may be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone_number: String,
    pub position_name: String,
    pub company: String,
    pub company_id: Option<i32>,
    pub position_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    type Key = String;

    const NAME: &'static str = RESOURCE_USER;

    fn id(&self) -> i32 {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn natural_key(&self) -> String {
        self.email.clone()
    }
}

/// Self-service signup body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignUp {
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Minimum 6 characters
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

/// Login body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct Login {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Full user creation body (authenticated endpoint)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "first_name is required"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name is required"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
    #[validate(length(min = 1, message = "role is required"))]
    #[schema(example = "staff")]
    pub role: String,
    #[validate(length(min = 1, message = "phone_number is required"))]
    #[schema(example = "+62 812 0000 0000")]
    pub phone_number: String,
    #[validate(length(min = 1, message = "position_name is required"))]
    #[schema(example = "Backend Engineer")]
    pub position_name: String,
    #[validate(length(min = 1, message = "company is required"))]
    #[schema(example = "Acme Corp")]
    pub company: String,
    #[schema(example = 1)]
    pub company_id: Option<i32>,
    #[schema(example = 1)]
    pub position_id: Option<i32>,
}

/// User update body.
///
/// `email` and `password` are mandatory on every update; the remaining
/// fields keep their stored value when omitted or empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub phone_number: Option<String>,
    pub position_name: Option<String>,
    pub company: Option<String>,
    pub company_id: Option<i32>,
    pub position_id: Option<i32>,
}

/// Row handed to the store on insert; the credential is already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone_number: String,
    pub position_name: String,
    pub company: String,
    pub company_id: Option<i32>,
    pub position_id: Option<i32>,
}

/// Changes handed to the store on update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub phone_number: Option<String>,
    pub position_name: Option<String>,
    pub company: Option<String>,
    pub company_id: Option<i32>,
    pub position_id: Option<i32>,
}

impl UserPatch {
    /// Build a patch from an update body, treating empty strings as absent.
    pub fn from_update(update: UpdateUser, password_hash: String) -> Self {
        let keep = |value: Option<String>| value.filter(|s| !s.is_empty());
        Self {
            first_name: keep(update.first_name),
            last_name: keep(update.last_name),
            email: Some(update.email),
            password_hash: Some(password_hash),
            role: keep(update.role),
            phone_number: keep(update.phone_number),
            position_name: keep(update.position_name),
            company: keep(update.company),
            company_id: update.company_id,
            position_id: update.position_id,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub role: String,
    pub phone_number: String,
    pub position_name: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            phone_number: user.phone_number,
            position_name: user.position_name,
            company: user.company,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
