//! API Error Module
//!
//! This module defines the error taxonomy shared by every core operation
//! and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error taxonomy and constructors
//! └── conversion.rs - IntoResponse implementation (error envelope)
//! ```
//!
//! # Error Taxonomy
//!
//! - `BadRequest` - missing or invalid input
//! - `Unauthorized` - bad credentials, invalid/expired/mismatched token
//! - `NotFound` - no matching user
//! - `Conflict` - username or email uniqueness violation
//! - `Internal` / `Database` / `Hash` - server-side failures
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return it directly.
//! Every error renders as the `{statusCode, message, success: false}`
//! envelope; infrastructure errors are logged and collapsed to a generic
//! message.

/// Error taxonomy definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
