//! Access-token issuing and verification.
//!
//! Tokens are HS256 JWTs. Signature, issuer and audience are checked by
//! `jsonwebtoken`; the time window is checked here against an explicit
//! clock so that expiry and not-before failures are reported separately.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, ACCESS_TOKEN_SUBJECT, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Unique token id
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub user_id: i32,
}

/// Token response returned after successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Signs and checks access tokens. Holds no per-token state.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    has_key: bool,
    issuer: String,
    audience: String,
    lifetime_hours: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("lifetime_hours", &self.lifetime_hours)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(config: &Config) -> Self {
        Self::from_secret(
            config.jwt_secret_bytes(),
            &config.jwt_issuer,
            &config.jwt_audience,
            config.jwt_expiration_hours,
        )
    }

    pub fn from_secret(secret: &[u8], issuer: &str, audience: &str, lifetime_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            has_key: !secret.is_empty(),
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            lifetime_hours,
        }
    }

    /// Token lifetime in seconds.
    pub fn expires_in(&self) -> i64 {
        self.lifetime_hours.saturating_mul(SECONDS_PER_HOUR)
    }

    /// Issue a token for `user_id`, valid from now.
    pub fn issue(&self, user_id: i32) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            access_token: self.issue_at(user_id, Utc::now())?,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.expires_in(),
        })
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, user_id: i32, now: DateTime<Utc>) -> AppResult<String> {
        if !self.has_key {
            return Err(AppError::Signing("signing key is not configured".into()));
        }

        let expires_at = Duration::try_hours(self.lifetime_hours)
            .filter(|lifetime| *lifetime > Duration::zero())
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Signing(format!("invalid token lifetime: {}h", self.lifetime_hours))
            })?;

        let issued_at = now.timestamp();
        let claims = Claims {
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: ACCESS_TOKEN_SUBJECT.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: expires_at.timestamp(),
            user_id,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Signing(e.to_string()))
    }

    /// Verify a token and return the user id it was issued for.
    pub fn verify(&self, token: &str) -> AppResult<i32> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against the clock value `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<i32> {
        let claims = self.decode(token)?;
        let now = now.timestamp();

        if now >= claims.exp {
            return Err(AppError::TokenExpired);
        }
        if now < claims.nbf {
            return Err(AppError::TokenNotYetValid);
        }
        if claims.sub != ACCESS_TOKEN_SUBJECT {
            return Err(AppError::TokenMalformed);
        }

        Ok(claims.user_id)
    }

    fn decode(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "aud", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected token: {}", e);
                AppError::TokenMalformed
            })
    }
}
