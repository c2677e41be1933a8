// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;

use self::state::AppState;
use crate::ServerError;

/// Create the Axum application router with all routes and middleware
pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/item_types/", get(handlers::list_item_types))
        .route("/item_types/:identifier/", get(handlers::get_item_type))
        .route("/items/search", get(handlers::search_items))
        .route("/items/search/", get(handlers::search_items))
        .route("/health", get(handlers::health_check))
        .layer(cors)
        .with_state(state)
}

/// Run the server on the specified address until Ctrl+C
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on {}", addr);
    info!("- Item types endpoint: http://{}/item_types/", addr);
    info!("- Search endpoint: http://{}/items/search?q=", addr);
    info!("- Health endpoint: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
