/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts an access token from the cookie store
 * or the Authorization header, verifies it, resolves the user, and makes
 * the identity available to handlers.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::cookies::{get_cookie, ACCESS_COOKIE_NAME};
use crate::auth::users::{get_public_user_by_id, PublicUser};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity resolved by the access guard
///
/// Carries the sanitized user; also usable directly as an extractor in
/// handlers behind the guard.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub PublicUser);

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the access token from the `accessToken` cookie or the
///    `Authorization: Bearer` header
/// 2. Verifies signature and expiry against the access-token secret
/// 3. Resolves the user by the decoded identifier (sanitized projection)
/// 4. Attaches the identity to request extensions for downstream handlers
///
/// Returns 401 Unauthorized if the token is missing, invalid, expired, or
/// the account no longer exists.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = access_token_from(request.headers()).ok_or_else(|| {
        tracing::warn!("missing access token");
        ApiError::unauthorized("Missing access token")
    })?;

    let claims = state.tokens.verify_access(&token).map_err(|e| {
        tracing::warn!("access token rejected: {}", e);
        ApiError::unauthorized("Invalid access token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("access token carries a malformed user id");
        ApiError::unauthorized("Invalid access token")
    })?;

    let user = get_public_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("access token for unknown user: {}", user_id);
            ApiError::unauthorized("Invalid access token")
        })?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Pull the access token from the cookie store or the Authorization header
fn access_token_from(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = get_cookie(headers, ACCESS_COOKIE_NAME) {
        return Some(token);
    }

    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

impl axum::extract::FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentUser not found in request extensions");
            ApiError::unauthorized("Authentication required")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "accessToken=tok-cookie".parse().unwrap());

        assert_eq!(access_token_from(&headers), Some("tok-cookie".to_string()));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer tok-header".parse().unwrap());

        assert_eq!(access_token_from(&headers), Some("tok-header".to_string()));
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "accessToken=tok-cookie".parse().unwrap());
        headers.insert(AUTHORIZATION, "Bearer tok-header".parse().unwrap());

        assert_eq!(access_token_from(&headers), Some("tok-cookie".to_string()));
    }

    #[test]
    fn test_malformed_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert_eq!(access_token_from(&headers), None);
    }

    #[test]
    fn test_no_token_sources() {
        assert_eq!(access_token_from(&HeaderMap::new()), None);
    }
}
