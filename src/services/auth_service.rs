//! Authentication service - signup, login and bearer-token checks.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use super::user_service::check_credentials;
use super::{Lifecycle, TokenIssuer, TokenResponse};
use crate::config::ROLE_USER;
use crate::domain::{Login, Password, SignUp, User, UserDraft};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hash checked against when the email is unknown, so a miss costs the
/// same as a wrong password.
static DUMMY_HASH: Lazy<Password> = Lazy::new(|| {
    Password::hash("no-such-user-password")
        .unwrap_or_else(|_| Password::from_hash(String::new()))
});

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Self-service registration with email and password only
    async fn signup(&self, body: SignUp) -> AppResult<User>;

    /// Check credentials and issue an access token
    async fn login(&self, body: Login) -> AppResult<TokenResponse>;

    /// Verify a bearer token and return the user id it carries
    fn verify_token(&self, token: &str) -> AppResult<i32>;
}

pub struct Authenticator {
    users: Lifecycle<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl Authenticator {
    pub fn new(users: Lifecycle<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn signup(&self, body: SignUp) -> AppResult<User> {
        check_credentials(&body.email, &body.password)?;

        self.users
            .create(body.email.clone(), move || {
                let password_hash = Password::hash(&body.password)?.into_string();
                Ok(UserDraft {
                    email: body.email,
                    password_hash,
                    role: ROLE_USER.to_string(),
                    ..Default::default()
                })
            })
            .await
    }

    async fn login(&self, body: Login) -> AppResult<TokenResponse> {
        let user = self
            .users
            .repository()
            .find_active_by_key(&body.email)
            .await?
            .into_iter()
            .next();

        let Some(user) = user else {
            let _ = DUMMY_HASH.verify(&body.password);
            tracing::warn!("Login failed: unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if !Password::from_hash(user.password_hash.as_str()).verify(&body.password) {
            tracing::warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "User logged in");
        self.tokens.issue(user.id)
    }

    fn verify_token(&self, token: &str) -> AppResult<i32> {
        self.tokens.verify(token)
    }
}
