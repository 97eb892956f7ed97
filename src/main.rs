/**
 * XFAuth Server Entry Point
 *
 * This is the main entry point for the XFAuth backend server. It loads the
 * environment, initializes tracing, resolves configuration once, and serves
 * the Axum application.
 */

use xfauth::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("invalid configuration: {}", e);
    })?;
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = create_app(config).await.inspect_err(|e| {
        tracing::error!("failed to initialize server: {}", e);
    })?;

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
