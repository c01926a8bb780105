//! Server binary: resolves database and listener settings from the environment and serves the items API.

use items_api::{api_routes, AppState, DbConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("items_api=info,tower_http=info")),
        )
        .init();

    let server = ServerConfig::from_env();
    let db = DbConfig::from_env();
    match &db.settings {
        Ok(s) => tracing::info!(source = ?db.source, host = %s.host, port = s.port, database = %s.database, "database settings"),
        // Not fatal: reported by the health check and as 503 on item routes.
        Err(e) => tracing::warn!(source = ?db.source, error = %e, "database settings invalid"),
    }

    let app = api_routes(AppState::postgres(db), server.body_limit);
    let listener = TcpListener::bind(&server.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
