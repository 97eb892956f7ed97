/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. All wire JSON is camelCase.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::PublicUser;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's full name
    pub full_name: String,
    /// User's email address
    pub email: String,
    /// User's chosen username (normalized to lowercase before storage)
    pub username: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
///
/// At least one of `username` / `email` must be present.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Refresh request body
///
/// The refresh token may instead arrive via cookie; the body is optional.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Change-password request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Account-details update request
///
/// At least one field must be present.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Login response data: sanitized user plus both tokens
///
/// Tokens are also set as cookies; the body copy serves clients that cannot
/// read the cookie store.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh response data: the freshly rotated token pair
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
