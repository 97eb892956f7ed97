/**
 * Change Password Handler
 *
 * This module implements the handler for POST /change-password. The full
 * user record is re-fetched so the stored hash is current, the old password
 * is verified, and the new one is hashed and persisted without touching any
 * unrelated field. Previously issued refresh tokens stay valid.
 */

use axum::{extract::State, http::StatusCode, Json};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::handlers::types::ChangePasswordRequest;
use crate::auth::users::{get_user_by_id, update_password};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Validated password change
#[derive(Debug)]
pub(crate) struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Validate a change-password request: both fields non-blank
pub(crate) fn validate(payload: ChangePasswordRequest) -> Result<PasswordChange, ApiError> {
    let old_password = payload.old_password.trim();
    let new_password = payload.new_password.trim();

    if old_password.is_empty() || new_password.is_empty() {
        return Err(ApiError::bad_request(
            "Old and new passwords are required",
        ));
    }

    Ok(PasswordChange {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
    })
}

/// Change-password handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is blank, or the old password is incorrect
/// * `401 Unauthorized` - the authenticated account no longer exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let change = validate(payload)?;

    let user = get_user_by_id(&state.db, current.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid access token"))?;

    let valid = verify(&change.old_password, &user.password_hash)?;
    if !valid {
        tracing::warn!("wrong old password for user: {}", user.username);
        return Err(ApiError::bad_request("Invalid old password"));
    }

    let password_hash = hash(&change.new_password, DEFAULT_COST)?;
    update_password(&state.db, user.id, &password_hash).await?;

    tracing::info!("password changed for user: {}", user.username);

    Ok(ApiResponse::new(
        StatusCode::OK,
        serde_json::json!({}),
        "Password changed successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_old_password() {
        let err = validate(ChangePasswordRequest {
            old_password: "   ".to_string(),
            new_password: "next-secret".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_rejects_blank_new_password() {
        let err = validate(ChangePasswordRequest {
            old_password: "secret1".to_string(),
            new_password: String::new(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_trims_passwords() {
        let change = validate(ChangePasswordRequest {
            old_password: " secret1 ".to_string(),
            new_password: " next-secret ".to_string(),
        })
        .unwrap();

        assert_eq!(change.old_password, "secret1");
        assert_eq!(change.new_password, "next-secret");
    }
}
