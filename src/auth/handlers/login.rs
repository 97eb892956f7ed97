/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Require a password plus at least one of username / email
 * 2. Look up the user by identifier
 * 3. Verify the password with bcrypt
 * 4. Issue an access token and a refresh token
 * 5. Persist the refresh token on the user record (rotation point)
 * 6. Return the sanitized user and both tokens, and set both cookies
 *
 * # Security
 *
 * - Password verification uses bcrypt
 * - Tokens are delivered both in the body and as secure, http-only cookies
 * - Persisting the new refresh token invalidates any previously issued one
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use bcrypt::verify;

use crate::auth::cookies::{auth_cookie, ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME};
use crate::auth::handlers::types::{LoginData, LoginRequest};
use crate::auth::users::{find_by_identifier, get_public_user_by_id, update_refresh_token};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Validated login input
#[derive(Debug, PartialEq)]
pub(crate) struct Credentials {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

/// Validate a login request
///
/// At least one of username / email is required, plus a non-blank password.
/// The username is lowercased to match stored records.
pub(crate) fn validate(payload: LoginRequest) -> Result<Credentials, ApiError> {
    let username = payload
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if username.is_none() && email.is_none() {
        return Err(ApiError::bad_request("Username or email is required"));
    }

    let password = payload.password.trim();
    if password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }

    Ok(Credentials {
        username,
        email,
        password: password.to_string(),
    })
}

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - neither identifier supplied, or password blank
/// * `404 Not Found` - no user matches the identifier
/// * `401 Unauthorized` - password mismatch
/// * `500 Internal Server Error` - verification, token issuance, or
///   database failure
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let credentials = validate(payload)?;

    let user = find_by_identifier(
        &state.db,
        credentials.username.as_deref(),
        credentials.email.as_deref(),
    )
    .await?
    .ok_or_else(|| {
        tracing::warn!("login attempt for unknown identifier");
        ApiError::not_found("User does not exist")
    })?;

    let valid = verify(&credentials.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("invalid password for user: {}", user.username);
        return Err(ApiError::unauthorized("Invalid user credentials"));
    }

    let access_token = state.tokens.issue_access_token(&user).map_err(|e| {
        tracing::error!("failed to issue access token: {:?}", e);
        ApiError::internal("Failed to issue tokens")
    })?;
    let refresh_token = state.tokens.issue_refresh_token(&user).map_err(|e| {
        tracing::error!("failed to issue refresh token: {:?}", e);
        ApiError::internal("Failed to issue tokens")
    })?;

    // Rotation point: overwriting the stored value invalidates any
    // previously issued refresh token.
    update_refresh_token(&state.db, user.id, Some(&refresh_token)).await?;

    let public = get_public_user_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::internal("Something went wrong while logging in"))?;

    tracing::info!("user logged in: {} ({})", public.username, public.email);

    let cookies = AppendHeaders([
        (
            SET_COOKIE,
            auth_cookie(
                ACCESS_COOKIE_NAME,
                &access_token,
                state.tokens.access_ttl_secs(),
            ),
        ),
        (
            SET_COOKIE,
            auth_cookie(
                REFRESH_COOKIE_NAME,
                &refresh_token,
                state.tokens.refresh_ttl_secs(),
            ),
        ),
    ]);

    Ok((
        cookies,
        ApiResponse::new(
            StatusCode::OK,
            LoginData {
                user: public,
                access_token,
                refresh_token,
            },
            "User logged in successfully",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_requires_an_identifier() {
        let err = validate(LoginRequest {
            username: None,
            email: None,
            password: "secret1".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_accepts_email_only() {
        let credentials = validate(LoginRequest {
            username: None,
            email: Some("a@x.com".to_string()),
            password: "secret1".to_string(),
        })
        .unwrap();

        assert_eq!(credentials.email.as_deref(), Some("a@x.com"));
        assert_eq!(credentials.username, None);
    }

    #[test]
    fn test_validate_lowercases_username() {
        let credentials = validate(LoginRequest {
            username: Some("Alice".to_string()),
            email: None,
            password: "secret1".to_string(),
        })
        .unwrap();

        assert_eq!(credentials.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_validate_blank_identifier_counts_as_absent() {
        let err = validate(LoginRequest {
            username: Some("   ".to_string()),
            email: Some(String::new()),
            password: "secret1".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_requires_password() {
        let err = validate(LoginRequest {
            username: Some("alice".to_string()),
            email: None,
            password: "  ".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
