//! Hostel web server binary
//!
//! # Usage
//!
//! ```bash
//! hostel-web
//! ```
//!
//! Configuration comes from the environment (a `.env` file is honored):
//!
//! - `HOSTEL_HOST` - bind address (default `0.0.0.0`)
//! - `HOSTEL_PORT` - bind port (default `8080`)
//! - `HOSTEL_DATABASE_URL` / `DATABASE_URL` - SQLite URL (default `sqlite://hostel.db`)
//! - `HOSTEL_DOCUMENTS_ROOT` - directory for generated PDFs (default `documents`)
//! - `HOSTEL_BILLING_TICK_SECS` - billing timer interval (default `3600`)
//! - `HOSTEL_LOG_LEVEL` / `RUST_LOG` - log filter (default `info`)

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use infra_db::{create_pool, run_migrations, seed_rooms, DatabaseConfig};
use infra_docs::DocumentStore;
use interface_web::config::WebConfig;
use interface_web::{create_router, scheduler, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = config.port,
        "Starting hostel web server"
    );

    let pool = create_pool(DatabaseConfig::new(&config.database_url)).await?;
    run_migrations(&pool).await?;
    seed_rooms(&pool).await?;

    let documents = DocumentStore::new(&config.documents_root);

    scheduler::spawn_billing_timer(AppState {
        pool: pool.clone(),
        documents: documents.clone(),
        config: config.clone(),
    });

    let app = create_router(pool, documents, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from the environment, falling back to individual
/// variables and then to defaults
fn load_config() -> WebConfig {
    WebConfig::from_env().unwrap_or_else(|_| {
        let defaults = WebConfig::default();
        WebConfig {
            host: std::env::var("HOSTEL_HOST").unwrap_or(defaults.host),
            port: std::env::var("HOSTEL_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("HOSTEL_DATABASE_URL")
                .or_else(|_| std::env::var("DATABASE_URL"))
                .unwrap_or(defaults.database_url),
            documents_root: std::env::var("HOSTEL_DOCUMENTS_ROOT")
                .unwrap_or(defaults.documents_root),
            billing_tick_secs: std::env::var("HOSTEL_BILLING_TICK_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.billing_tick_secs),
            log_level: std::env::var("HOSTEL_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for a shutdown signal (ctrl-c or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
