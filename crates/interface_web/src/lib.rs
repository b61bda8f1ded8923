//! HTTP Interface Layer
//!
//! This crate provides the form-driven web surface for the hostel system
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: GET routes answer with JSON view models, POST routes
//!   take form posts and redirect with a flash code
//! - **DTOs**: Form payloads and view models
//! - **Billing**: Bill generation shared by the form and the scheduled
//!   day-27 sweep
//! - **Scheduler**: The background timer driving the sweep
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_web::{create_router, config::WebConfig};
//!
//! let app = create_router(pool, documents, WebConfig::default());
//! axum::serve(listener, app).await?;
//! ```

pub mod billing;
pub mod config;
pub mod dto;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod scheduler;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use infra_db::DatabasePool;
use infra_docs::DocumentStore;

use crate::config::WebConfig;
use crate::handlers::{bills, dashboard, documents, guests, health, reports, rooms, transactions};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DatabasePool,
    pub documents: DocumentStore,
    pub config: WebConfig,
}

/// Creates the main application router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `documents` - Store the generated PDFs live in
/// * `config` - Web configuration
pub fn create_router(pool: DatabasePool, documents: DocumentStore, config: WebConfig) -> Router {
    let state = AppState {
        pool,
        documents,
        config,
    };

    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/guests", get(guests::list_guests).post(guests::register_guest))
        .route("/rooms", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/guests/:id/bill",
            get(bills::bill_preview).post(bills::generate_bill),
        )
        .route("/transactions", get(transactions::list_transactions))
        .route("/transactions/payments", post(transactions::record_payment))
        .route("/transactions/expenses", post(transactions::record_expense))
        .route("/reports", get(reports::monthly_report))
        .route("/documents/*path", get(documents::download_document))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
