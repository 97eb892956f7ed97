/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
///
/// This is the full record, including the password hash and the currently
/// valid refresh token. It is never serialized into a response payload;
/// use [`PublicUser`] for anything client-facing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, stored lowercase)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// User's full name
    pub full_name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Currently valid refresh token, if any (at most one per user)
    pub refresh_token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Sanitized user projection (without sensitive data)
///
/// Selected directly from the database with the password hash and refresh
/// token columns excluded. Safe to return to clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `full_name` - User's full name
/// * `email` - User email
/// * `username` - User's chosen username (caller normalizes to lowercase)
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    full_name: &str,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, full_name, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, username, email, full_name, password_hash, refresh_token, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(full_name)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by username or email
///
/// Either identifier may be absent; a `None` bind never matches. This mirrors
/// the `$or` lookup used for both login and the registration conflict check.
pub async fn find_by_identifier(
    pool: &PgPool,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, full_name, password_hash, refresh_token, created_at, updated_at
        FROM users
        WHERE username = $1 OR email = $2
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID (full record, including credentials)
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, full_name, password_hash, refresh_token, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get the sanitized projection of a user by ID
///
/// The password hash and refresh token columns are excluded at the query
/// level, so the result can be returned to clients as-is.
pub async fn get_public_user_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PublicUser>, sqlx::Error> {
    let user = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, username, email, full_name, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Persist (or clear) the user's current refresh token
///
/// Touches only the refresh token and `updated_at`; in particular it never
/// re-hashes the password. Passing `None` clears the token (logout).
pub async fn update_refresh_token(
    pool: &PgPool,
    user_id: Uuid,
    token: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET refresh_token = $1, updated_at = $2
        WHERE id = $3
        "#,
    )
    .bind(token)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist a new password hash for the user
pub async fn update_password(
    pool: &PgPool,
    user_id: Uuid,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $1, updated_at = $2
        WHERE id = $3
        "#,
    )
    .bind(password_hash)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update non-credential profile fields
///
/// Fields passed as `None` are left untouched. Returns the sanitized
/// projection of the updated record, or `None` if the user no longer exists.
pub async fn update_account_details(
    pool: &PgPool,
    user_id: Uuid,
    full_name: Option<&str>,
    email: Option<&str>,
) -> Result<Option<PublicUser>, sqlx::Error> {
    let user = sqlx::query_as::<_, PublicUser>(
        r#"
        UPDATE users
        SET full_name = COALESCE($1, full_name),
            email = COALESCE($2, email),
            updated_at = $3
        WHERE id = $4
        RETURNING id, username, email, full_name, created_at, updated_at
        "#,
    )
    .bind(full_name)
    .bind(email)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_user_serialization_excludes_credentials() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Alice".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let object = json.as_object().unwrap();

        assert!(object.contains_key("username"));
        assert!(object.contains_key("fullName"));
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordHash"));
        assert!(!object.contains_key("refreshToken"));
    }
}
