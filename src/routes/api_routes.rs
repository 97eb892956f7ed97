/**
 * API Route Handlers
 *
 * This module wires the account endpoints onto the router and applies the
 * access guard to the protected subset.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - user registration
 * - `POST /login` - user login
 * - `POST /refresh-token` - refresh-token rotation
 * - `GET /healthz` - liveness probe
 *
 * ## Protected (access guard)
 * - `POST /logout`
 * - `POST /change-password`
 * - `GET /current-user`
 * - `PATCH /account`
 */

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::auth::handlers::{
    change_password, current_user, login, logout, refresh_token, register, update_account,
};
use crate::middleware::require_auth;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Liveness probe
async fn healthz() -> ApiResponse<serde_json::Value> {
    ApiResponse::new(StatusCode::OK, serde_json::json!({}), "OK")
}

/// Configure API routes
///
/// Protected routes carry the access guard as a route layer, so the guard
/// runs only for routes that actually match.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh-token", post(refresh_token))
        .route("/healthz", get(healthz));

    let protected = Router::new()
        .route("/logout", post(logout))
        .route("/change-password", post(change_password))
        .route("/current-user", get(current_user))
        .route("/account", patch(update_account))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
