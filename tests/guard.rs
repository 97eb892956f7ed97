//! Request-path tests that run without a database
//!
//! Every case here fails (or succeeds) before any database access, so the
//! router is built over a lazily connected pool that never dials out.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::auth_helpers::{lazy_pool, response_json, send_bearer, send_empty, send_json, test_app};

#[tokio::test]
async fn test_healthz_is_public() {
    let app = test_app(lazy_pool());

    let response = send_empty(&app, "GET", "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["statusCode"], 200);
}

#[tokio::test]
async fn test_unknown_route_is_an_error_envelope() {
    let app = test_app(lazy_pool());

    let response = send_empty(&app, "GET", "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_rejects_blank_fields() {
    let app = test_app(lazy_pool());

    let response = send_json(
        &app,
        "POST",
        "/register",
        json!({"fullName": "  ", "email": "a@x.com", "username": "alice", "password": "secret1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "All fields are required");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_login_requires_an_identifier() {
    let app = test_app(lazy_pool());

    let response = send_json(&app, "POST", "/login", json!({"password": "secret1"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Username or email is required");
}

#[tokio::test]
async fn test_refresh_without_token_is_unauthorized() {
    let app = test_app(lazy_pool());

    let response = send_empty(&app, "POST", "/refresh-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Unauthorized request");
}

#[tokio::test]
async fn test_refresh_with_garbage_token_is_unauthorized() {
    let app = test_app(lazy_pool());

    let response = send_json(
        &app,
        "POST",
        "/refresh-token",
        json!({"refreshToken": "not.a.token"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid refresh token");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = test_app(lazy_pool());

    let response = send_empty(&app, "GET", "/current-user").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Missing access token");
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let app = test_app(lazy_pool());

    let response = send_bearer(&app, "GET", "/current-user", "not.a.token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid access token");
}

#[tokio::test]
async fn test_logout_requires_authentication() {
    let app = test_app(lazy_pool());

    let response = send_empty(&app, "POST", "/logout").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
