//! Dhaka Market - storefront and admin back office.
//!
//! This binary serves the public storefront and the `/admin` back
//! office from a single process, persisting everything to flat JSON
//! documents on disk.

#![cfg_attr(not(test), forbid(unsafe_code))]

use dhaka_market_server::config::ServerConfig;
use dhaka_market_server::state::AppState;
use dhaka_market_server::store::DocumentStore;
use dhaka_market_server::{app, models};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dhaka_market_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create the document store and seed missing documents
    let store = DocumentStore::new(config.data_dir.clone());
    models::bootstrap(&store)
        .await
        .expect("Failed to seed data documents");
    tracing::info!(data_dir = %config.data_dir.display(), "document store ready");

    // The upload directory must exist before ServeDir and the upload
    // handler touch it
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create upload directory");

    let addr = config.socket_addr();
    let state = AppState::new(config, store);
    let app = app(state);

    tracing::info!("server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
