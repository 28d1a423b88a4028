//! Saffron API server binary.
//!
//! Startup order matters: configuration first (everything else needs it),
//! then tracing, then the database client. The Mongo client is the single
//! long-lived connection for the process; it is owned by the application
//! state for the server's lifetime and shut down explicitly after the
//! listener drains on SIGTERM/Ctrl-C.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use mongodb::bson::doc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saffron_api::config::AppConfig;
use saffron_api::routes;
use saffron_api::state::AppState;
use saffron_api::db;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "saffron_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect the database client
    let client = db::connect(&config.mongodb_uri)
        .await
        .expect("Failed to create database client");

    // Fail fast if the deployment is unreachable
    let database = client.database(&config.database_name);
    database
        .run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping database");
    db::ensure_indexes(&database)
        .await
        .expect("Failed to create indexes");
    tracing::info!(database = %config.database_name, "Database connected");

    // Build application state
    let addr = config.socket_addr();
    let state = AppState::new(config, client.clone());

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    // Start server
    tracing::info!("saffron-api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Explicit teardown of the long-lived connection
    client.shutdown().await;
    tracing::info!("Database client shut down");
}

/// Health check endpoint. Plain text; does not check dependencies.
async fn health() -> &'static str {
    "Saffron kitchen is open"
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
