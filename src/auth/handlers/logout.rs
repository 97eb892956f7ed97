/**
 * Logout Handler
 *
 * This module implements the handler for POST /logout. It requires an
 * authenticated identity, clears the persisted refresh token, and expires
 * both token cookies. Logging out twice produces the same end state.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse},
};

use crate::auth::cookies::{clear_cookie, ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME};
use crate::auth::users::update_refresh_token;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Logout handler
///
/// Clears the stored refresh token for the authenticated user, so a
/// subsequent refresh with any previously issued token fails. Idempotent.
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    update_refresh_token(&state.db, user.id, None).await?;

    tracing::info!("user logged out: {}", user.username);

    let cookies = AppendHeaders([
        (SET_COOKIE, clear_cookie(ACCESS_COOKIE_NAME)),
        (SET_COOKIE, clear_cookie(REFRESH_COOKIE_NAME)),
    ]);

    Ok((
        cookies,
        ApiResponse::new(StatusCode::OK, serde_json::json!({}), "User logged out"),
    ))
}
