/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * database pool creation, state construction, and route configuration.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Connects to the database (failure here aborts startup), builds the shared
/// state from the injected configuration, and assembles the router.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing xfauth backend server");

    let db_pool = load_database(&config.database_url).await?;

    let app_state = AppState::new(db_pool, config.tokens);

    tracing::info!("Router configured");

    Ok(create_router(app_state))
}
