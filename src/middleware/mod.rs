//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server. Middleware
//! runs before requests reach handlers; currently that is the access guard
//! protecting authenticated routes.

pub mod auth;

pub use auth::{require_auth, CurrentUser};
