/**
 * Server Configuration
 *
 * This module loads process configuration from the environment, exactly once
 * at startup, and owns database pool creation. Components receive their
 * configuration explicitly; nothing below this layer reads environment
 * variables.
 */

use sqlx::PgPool;
use thiserror::Error;

use crate::auth::tokens::TokenConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCESS_TTL_SECS: i64 = 900; // 15 minutes
const DEFAULT_REFRESH_TTL_SECS: i64 = 864_000; // 10 days

/// Configuration load failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for environment variable {0}")]
    InvalidVar(&'static str),
}

/// Process-wide configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Postgres connection string
    pub database_url: String,
    /// Token secrets and expiries
    pub tokens: TokenConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// The token secrets are required; everything else has a development
    /// default. Consumed variables: `DATABASE_URL`, `SERVER_PORT`,
    /// `ACCESS_TOKEN_SECRET`, `ACCESS_TOKEN_TTL_SECS`,
    /// `REFRESH_TOKEN_SECRET`, `REFRESH_TOKEN_TTL_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = optional_parsed("SERVER_PORT", DEFAULT_PORT)?;

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let tokens = TokenConfig {
            access_secret: required("ACCESS_TOKEN_SECRET")?,
            access_ttl_secs: optional_parsed("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TTL_SECS)?,
            refresh_secret: required("REFRESH_TOKEN_SECRET")?,
            refresh_ttl_secs: optional_parsed("REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TTL_SECS)?,
        };

        Ok(Self {
            port,
            database_url,
            tokens,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional_parsed<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar(name)),
        Err(_) => Ok(default),
    }
}

/// Connect to the database and run migrations
///
/// Connection failure aborts startup. Migration failure is logged but
/// tolerated, since the schema may already be up to date.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "SERVER_PORT",
            "DATABASE_URL",
            "ACCESS_TOKEN_SECRET",
            "ACCESS_TOKEN_TTL_SECS",
            "REFRESH_TOKEN_SECRET",
            "REFRESH_TOKEN_TTL_SECS",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_missing_secret_is_an_error() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/xfauth");

        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingVar("ACCESS_TOKEN_SECRET"))
        ));
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/xfauth");
        std::env::set_var("ACCESS_TOKEN_SECRET", "a-secret");
        std::env::set_var("REFRESH_TOKEN_SECRET", "r-secret");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.tokens.access_ttl_secs, DEFAULT_ACCESS_TTL_SECS);
        assert_eq!(config.tokens.refresh_ttl_secs, DEFAULT_REFRESH_TTL_SECS);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("SERVER_PORT", "not-a-port");
        std::env::set_var("DATABASE_URL", "postgres://localhost/xfauth");
        std::env::set_var("ACCESS_TOKEN_SECRET", "a-secret");
        std::env::set_var("REFRESH_TOKEN_SECRET", "r-secret");

        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidVar("SERVER_PORT"))
        ));
    }
}
