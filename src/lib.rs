//! XFAuth - Main Library
//!
//! XFAuth is a minimal user-account backend exposing registration, login,
//! logout, and refresh-token rotation over HTTP, backed by Postgres.
//!
//! # Overview
//!
//! The library is organized around four collaborating pieces:
//!
//! - **`auth`** - credential and session-token lifecycle
//!   - User records and bcrypt password hashing (`auth::users`)
//!   - Access/refresh JWT issuance and verification (`auth::tokens`)
//!   - Cookie transport and the HTTP handlers (`auth::cookies`,
//!     `auth::handlers`)
//!
//! - **`middleware`** - the access guard protecting authenticated routes
//!
//! - **`error`** / **`response`** - the shared error taxonomy and the
//!   success/error response envelopes
//!
//! - **`server`** / **`routes`** - configuration, shared state, and router
//!   assembly
//!
//! # Usage
//!
//! ```rust,no_run
//! use xfauth::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! One logical request is handled by one asynchronous task; there is no
//! in-process locking. The only shared mutable resource is the persisted
//! user record, and correctness under concurrent refreshes rests on the
//! database's per-row update atomicity.

/// Credential and session-token lifecycle
pub mod auth;

/// Error taxonomy and response conversion
pub mod error;

/// Access guard middleware
pub mod middleware;

/// Success response envelope
pub mod response;

/// Route configuration
pub mod routes;

/// Server setup and shared state
pub mod server;

// Re-export commonly used types
pub use error::ApiError;
pub use response::ApiResponse;
pub use server::{create_app, AppConfig, AppState};
