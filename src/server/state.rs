/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Both fields are cheaply cloneable handles: `PgPool` is internally
 * reference-counted, and the token issuer is shared behind an `Arc`.
 * No other shared mutable state exists; concurrency correctness rests on
 * the database's per-row update atomicity.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::{TokenConfig, TokenIssuer};

/// Application state shared by all request handlers
///
/// Holds the database pool and the token issuer, both injected at startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Issues and verifies access/refresh tokens
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(db: PgPool, tokens: TokenConfig) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenIssuer::new(tokens)),
        }
    }
}

/// Allow handlers to extract the pool directly with `State(PgPool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the token issuer directly
impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
