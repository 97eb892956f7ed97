/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route configuration with the ambient layers (request tracing, CORS) and
 * the fallback handler.
 */

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let router = configure_api_routes(app_state.clone());

    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .fallback(|| async { ApiError::not_found("Route not found") });

    router.with_state(app_state)
}
