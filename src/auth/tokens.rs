/**
 * Token Issuance and Verification
 *
 * This module handles JWT generation and validation for both token kinds:
 * short-lived access tokens and long-lived refresh tokens. The two kinds are
 * signed with distinct secrets, so one can never be replayed as the other.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::users::User;

/// Secrets and expiries for both token kinds
///
/// Resolved once at startup and injected into [`TokenIssuer`]; nothing in
/// this module reads the environment.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,
    /// Access token lifetime in seconds (minutes-to-hours scale)
    pub access_ttl_secs: i64,
    /// Secret used to sign refresh tokens
    pub refresh_secret: String,
    /// Refresh token lifetime in seconds (days scale)
    pub refresh_ttl_secs: i64,
}

/// Claims carried by an access token
///
/// Includes denormalized profile fields so protected requests can resolve an
/// identity without a database round trip.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Full name
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Claims carried by a refresh token (minimal claim surface)
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token verification failure
///
/// Expired and otherwise-invalid tokens are distinguished here; callers
/// decide whether to surface that distinction.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(err),
        }
    }
}

/// Issues and verifies both kinds of session tokens
#[derive(Debug)]
pub struct TokenIssuer {
    config: TokenConfig,
}

impl TokenIssuer {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Access token lifetime in seconds (also the cookie Max-Age)
    pub fn access_ttl_secs(&self) -> i64 {
        self.config.access_ttl_secs
    }

    /// Refresh token lifetime in seconds (also the cookie Max-Age)
    pub fn refresh_ttl_secs(&self) -> i64 {
        self.config.refresh_ttl_secs
    }

    /// Create a short-lived access token for a user
    pub fn issue_access_token(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = AccessClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            exp: now + self.config.access_ttl_secs,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.config.access_secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Create a long-lived refresh token for a user
    pub fn issue_refresh_token(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = RefreshClaims {
            sub: user.id.to_string(),
            exp: now + self.config.refresh_ttl_secs,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.config.refresh_secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify and decode an access token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let key = DecodingKey::from_secret(self.config.access_secret.as_ref());
        let data = decode::<AccessClaims>(token, &key, &Validation::default())?;
        Ok(data.claims)
    }

    /// Verify and decode a refresh token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let key = DecodingKey::from_secret(self.config.refresh_secret.as_ref());
        let data = decode::<RefreshClaims>(token, &key, &Validation::default())?;
        Ok(data.claims)
    }
}
