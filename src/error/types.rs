/**
 * API Error Types
 *
 * This module defines the error taxonomy used by every core operation.
 * Each operation either returns a success value or fails with exactly one
 * of these kinds; there is no partial-success state.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// The first five variants carry a client-facing message. Infrastructure
/// failures (database, password hashing) are wrapped separately so their
/// details are logged but never leaked to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input
    #[error("{0}")]
    BadRequest(String),

    /// Bad credentials, invalid/expired/mismatched token, or missing auth
    #[error("{0}")]
    Unauthorized(String),

    /// No matching user
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (username or email already taken)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store inconsistency
    #[error("{0}")]
    Internal(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Map a database error, turning unique-constraint violations into a
    /// `Conflict` with the given message
    ///
    /// Pre-insert lookups cannot catch a concurrent insert; the unique index
    /// is the backstop, and this keeps that race surfacing as 409 rather
    /// than 500.
    pub fn conflict_on_unique(err: sqlx::Error, message: impl Into<String>) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict(message.into()),
            other => Self::Database(other),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Database(_) | Self::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// Infrastructure errors collapse to a generic message; their details
    /// stay in the logs.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.clone(),
            Self::Database(_) | Self::Hash(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = ApiError::from(sqlx::Error::RowNotFound);

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_conflict_on_unique_passes_through_other_errors() {
        let err = ApiError::conflict_on_unique(sqlx::Error::RowNotFound, "taken");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_taxonomy_message_is_preserved() {
        let err = ApiError::conflict("User with email or username already exists");
        assert_eq!(err.message(), "User with email or username already exists");
    }
}
