/**
 * Account Handlers
 *
 * Handlers for GET /current-user and PATCH /account. Both operate on the
 * identity resolved by the access guard and only ever expose the sanitized
 * user projection.
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::handlers::types::UpdateAccountRequest;
use crate::auth::users::{update_account_details, PublicUser};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Validated account update: at least one field present
#[derive(Debug, PartialEq)]
pub(crate) struct AccountChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Validate an account-details update
///
/// Blank fields count as absent; at least one real value is required.
pub(crate) fn validate(payload: UpdateAccountRequest) -> Result<AccountChanges, ApiError> {
    let full_name = payload
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if full_name.is_none() && email.is_none() {
        return Err(ApiError::bad_request("At least one field is required"));
    }

    Ok(AccountChanges { full_name, email })
}

/// Current-user handler
///
/// Returns the identity the access guard resolved; no further lookup.
pub async fn current_user(CurrentUser(user): CurrentUser) -> ApiResponse<PublicUser> {
    ApiResponse::new(StatusCode::OK, user, "Current user fetched successfully")
}

/// Account-details update handler
///
/// # Errors
///
/// * `400 Bad Request` - neither field supplied
/// * `409 Conflict` - new email already in use
/// * `401 Unauthorized` - the authenticated account no longer exists
pub async fn update_account(
    State(state): State<AppState>,
    CurrentUser(current): CurrentUser,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<ApiResponse<PublicUser>, ApiError> {
    let changes = validate(payload)?;

    let updated = update_account_details(
        &state.db,
        current.id,
        changes.full_name.as_deref(),
        changes.email.as_deref(),
    )
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "Email is already in use"))?
    .ok_or_else(|| ApiError::unauthorized("Invalid access token"))?;

    tracing::info!("account details updated for user: {}", updated.username);

    Ok(ApiResponse::new(
        StatusCode::OK,
        updated,
        "Account details updated successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_requires_a_field() {
        let err = validate(UpdateAccountRequest::default()).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_blank_fields_count_as_absent() {
        let err = validate(UpdateAccountRequest {
            full_name: Some("   ".to_string()),
            email: Some(String::new()),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_validate_accepts_single_field() {
        let changes = validate(UpdateAccountRequest {
            full_name: Some("Alice B. Example".to_string()),
            email: None,
        })
        .unwrap();

        assert_eq!(changes.full_name.as_deref(), Some("Alice B. Example"));
        assert_eq!(changes.email, None);
    }
}
