//! Linkable API Main Entry Point
//!
//! Serves the item type listing and the aggregate search over HTTP.

use dotenv::dotenv;
use linkable_api::config::create_cors_layer;
use linkable_api::server::{create_app, run_server, state::AppState};
use linkable_api::{Dependencies, ServerError, Settings};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linkable_api=info,linkable_registry=info"));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "linkable-api",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "linkable-api",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting Linkable API");

    let settings = Settings::from_env();

    let deps = match Dependencies::new(&settings) {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let app = create_app(
        AppState::new(deps.registry),
        create_cors_layer(&settings.cors_origins),
    );

    match run_server(app, settings.addr()).await {
        Ok(()) => {
            info!("Linkable API shut down cleanly");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Linkable API failed");
            Err(e)
        }
    }
}
