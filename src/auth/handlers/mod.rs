//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the account endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Logout handler
//! ├── refresh.rs  - Refresh-token rotation handler
//! ├── password.rs - Change-password handler
//! └── account.rs  - Current-user and account-update handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - user registration
//! - **`login`** - POST /login - credential check and token issuance
//! - **`logout`** - POST /logout - refresh-token invalidation
//! - **`refresh_token`** - POST /refresh-token - token rotation
//! - **`change_password`** - POST /change-password
//! - **`current_user`** - GET /current-user
//! - **`update_account`** - PATCH /account

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Refresh-token rotation handler
pub mod refresh;

/// Change-password handler
pub mod password;

/// Current-user and account-update handlers
pub mod account;

// Re-export commonly used types
pub use types::{
    ChangePasswordRequest, LoginData, LoginRequest, RefreshRequest, RegisterRequest, TokenPair,
    UpdateAccountRequest,
};

// Re-export handlers
pub use account::{current_user, update_account};
pub use login::login;
pub use logout::logout;
pub use password::change_password;
pub use refresh::refresh_token;
pub use register::register;
