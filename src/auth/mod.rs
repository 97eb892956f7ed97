//! Authentication Module
//!
//! This module owns the credential and session-token lifecycle: user
//! records and password hashing, access/refresh token issuance and
//! verification, cookie transport, and the HTTP handlers that tie them
//! together.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - Access/refresh token issuance and verification
//! ├── cookies.rs      - Token cookie transport
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Session Lifecycle
//!
//! 1. **Register**: fields validated → password bcrypt-hashed → user created
//! 2. **Login**: credentials verified → access + refresh tokens issued, the
//!    refresh token persisted on the user record
//! 3. **Refresh**: presented token must match the persisted one; a new pair
//!    is issued and persisted (rotation), invalidating the old token
//! 4. **Logout**: persisted refresh token cleared, cookies expired
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Access and refresh tokens are signed with distinct secrets
//! - A single refresh token is valid per user at any time

/// User model and database operations
pub mod users;

/// Token issuance and verification
pub mod tokens;

/// Token cookie transport
pub mod cookies;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{
    change_password, current_user, login, logout, refresh_token, register, LoginRequest,
    RegisterRequest,
};
pub use tokens::{TokenConfig, TokenIssuer};
pub use users::{PublicUser, User};
