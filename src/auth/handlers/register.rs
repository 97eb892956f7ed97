/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that all four fields are non-blank after trimming
 * 2. Normalize the username to lowercase
 * 3. Reject if the username or email is already taken
 * 4. Hash the password with bcrypt
 * 5. Create the user, then re-fetch the sanitized projection
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) before storage
 * - The plaintext password is never stored or logged
 * - The response never contains the password hash or a refresh token
 */

use axum::{extract::State, http::StatusCode, Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, find_by_identifier, get_public_user_by_id, PublicUser};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::server::state::AppState;

/// Validated, normalized registration input
#[derive(Debug, PartialEq)]
pub(crate) struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Validate a registration request
///
/// All four fields are required and must be non-blank after trimming.
/// The username is lowercased here so every later lookup and the stored
/// record agree on case.
pub(crate) fn validate(payload: RegisterRequest) -> Result<NewAccount, ApiError> {
    let full_name = payload.full_name.trim();
    let email = payload.email.trim();
    let username = payload.username.trim();
    let password = payload.password.trim();

    if full_name.is_empty() || email.is_empty() || username.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("All fields are required"));
    }

    Ok(NewAccount {
        full_name: full_name.to_string(),
        email: email.to_string(),
        username: username.to_lowercase(),
        password: password.to_string(),
    })
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - a required field is missing or blank
/// * `409 Conflict` - username or email already exists
/// * `500 Internal Server Error` - hashing/database failure, or the
///   post-create fetch found nothing
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ApiResponse<PublicUser>, ApiError> {
    let account = validate(payload)?;
    tracing::info!("registration request for username: {}", account.username);

    let existing =
        find_by_identifier(&state.db, Some(&account.username), Some(&account.email)).await?;
    if existing.is_some() {
        tracing::warn!("registration conflict for username: {}", account.username);
        return Err(ApiError::conflict(
            "User with email or username already exists",
        ));
    }

    let password_hash = hash(&account.password, DEFAULT_COST)?;

    // A concurrent registration can slip past the lookup above; the unique
    // indexes settle it and the violation still surfaces as a conflict.
    let user = create_user(
        &state.db,
        &account.full_name,
        &account.email,
        &account.username,
        &password_hash,
    )
    .await
    .map_err(|e| ApiError::conflict_on_unique(e, "User with email or username already exists"))?;

    let created = get_public_user_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::internal("Something went wrong while registering the user"))?;

    tracing::info!("user registered: {} ({})", created.username, created.email);

    Ok(ApiResponse::new(
        StatusCode::CREATED,
        created,
        "User registered successfully",
    ))
}
