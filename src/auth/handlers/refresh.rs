/**
 * Refresh Token Handler
 *
 * This module implements refresh-token rotation for POST /refresh-token.
 *
 * # Rotation
 *
 * The incoming token must verify against the refresh secret AND match the
 * value currently persisted on the user record. Every successful refresh
 * stores a new token, so replaying an older one fails: rotation overwrote
 * the stored value. Invalid signature and expiry both surface as a plain
 * 401; the distinction is logged but not exposed.
 *
 * Two concurrent refreshes with the same stale token race on the stored
 * value; the database's per-row update atomicity decides the winner and the
 * loser fails the match check on its next attempt.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use uuid::Uuid;

use crate::auth::cookies::{auth_cookie, get_cookie, ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME};
use crate::auth::handlers::types::{RefreshRequest, TokenPair};
use crate::auth::users::{get_user_by_id, update_refresh_token};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Pull the refresh token from the cookie store or the request body
pub(crate) fn incoming_refresh_token(
    headers: &HeaderMap,
    payload: Option<&RefreshRequest>,
) -> Option<String> {
    if let Some(token) = get_cookie(headers, REFRESH_COOKIE_NAME) {
        return Some(token);
    }

    payload?
        .refresh_token
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Refresh-token handler
///
/// # Errors
///
/// * `401 Unauthorized` - token absent, signature invalid, expired, user
///   gone, or the token does not match the persisted value (stale/reused)
/// * `500 Internal Server Error` - token issuance or database failure
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Option<Json<RefreshRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let incoming = incoming_refresh_token(&headers, payload.as_deref()).ok_or_else(|| {
        tracing::warn!("refresh token missing from cookie and body");
        ApiError::unauthorized("Unauthorized request")
    })?;

    let claims = state.tokens.verify_refresh(&incoming).map_err(|e| {
        tracing::warn!("refresh token rejected: {}", e);
        ApiError::unauthorized("Invalid refresh token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::unauthorized("Invalid refresh token"))?;

    let user = get_user_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("refresh token for unknown user: {}", user_id);
            ApiError::unauthorized("Invalid refresh token")
        })?;

    // A verified token that no longer matches the stored value was rotated
    // away (or cleared by logout); treat it as a replay.
    if user.refresh_token.as_deref() != Some(incoming.as_str()) {
        tracing::warn!("stale refresh token presented for user: {}", user.id);
        return Err(ApiError::unauthorized("Refresh token is expired or used"));
    }

    let access_token = state.tokens.issue_access_token(&user).map_err(|e| {
        tracing::error!("failed to issue access token: {:?}", e);
        ApiError::internal("Failed to issue tokens")
    })?;
    let new_refresh_token = state.tokens.issue_refresh_token(&user).map_err(|e| {
        tracing::error!("failed to issue refresh token: {:?}", e);
        ApiError::internal("Failed to issue tokens")
    })?;

    update_refresh_token(&state.db, user.id, Some(&new_refresh_token)).await?;

    tracing::info!("tokens refreshed for user: {}", user.username);

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
                &new_refresh_token,
                state.tokens.refresh_ttl_secs(),
            ),
        ),
    ]);

    Ok((
        cookies,
        ApiResponse::new(
            StatusCode::OK,
            TokenPair {
                access_token,
                refresh_token: new_refresh_token,
            },
            "Access token refreshed",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "refreshToken=tok-cookie".parse().unwrap());

        assert_eq!(
            incoming_refresh_token(&headers, None),
            Some("tok-cookie".to_string())
        );
    }

    #[test]
    fn test_token_from_body() {
        let payload = RefreshRequest {
            refresh_token: Some("tok-body".to_string()),
        };

        assert_eq!(
            incoming_refresh_token(&HeaderMap::new(), Some(&payload)),
            Some("tok-body".to_string())
        );
    }

    #[test]
    fn test_cookie_takes_precedence_over_body() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "refreshToken=tok-cookie".parse().unwrap());
        let payload = RefreshRequest {
            refresh_token: Some("tok-body".to_string()),
        };

        assert_eq!(
            incoming_refresh_token(&headers, Some(&payload)),
            Some("tok-cookie".to_string())
        );
    }

    #[test]
    fn test_blank_body_token_counts_as_absent() {
        let payload = RefreshRequest {
            refresh_token: Some("   ".to_string()),
        };

        assert_eq!(incoming_refresh_token(&HeaderMap::new(), Some(&payload)), None);
    }

    #[test]
    fn test_no_token_sources() {
        assert_eq!(incoming_refresh_token(&HeaderMap::new(), None), None);
    }
}
