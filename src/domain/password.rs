//! Credential codec.
//!
//! Turns a plaintext password into a salted Argon2 PHC string and checks a
//! candidate against a stored one. Length and format rules live with the
//! callers; the codec hashes whatever it is given.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// A stored credential hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash `plain` with a fresh random salt.
    ///
    /// Two calls with the same input yield different strings that both
    /// verify against it.
    pub fn hash(plain: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AppError::Encoding(e.to_string()))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Whether `plain` matches. A malformed stored hash never matches.
    pub fn verify(&self, plain: &str) -> bool {
        self.check(plain).unwrap_or(false)
    }

    /// Like [`Password::verify`] but reports a malformed stored hash as
    /// [`AppError::Encoding`] instead of a mismatch.
    pub fn check(&self, plain: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&self.hash)
            .map_err(|e| AppError::Encoding(format!("invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
