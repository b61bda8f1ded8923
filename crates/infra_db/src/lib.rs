//! Infrastructure Database Layer
//!
//! This crate provides the SQLite persistence layer for the hostel
//! management system, built on SQLx with embedded migrations.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: one repository per aggregate
//! (rooms, guests, bills, ledger), each owning a handle to the shared
//! connection pool and exposing explicit queries that return
//! fully-materialized domain records. Multi-row invariants run inside
//! transactions in the repository, never in handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, RoomRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://hostel.db")).await?;
//! run_migrations(&pool).await?;
//! let rooms = RoomRepository::new(pool.clone());
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod seed;

pub use error::DatabaseError;
pub use pool::{
    create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool, MIGRATOR,
};
pub use repositories::{
    BillRepository, BillWithGuest, GuestRepository, LedgerRepository, PaymentWithGuest,
    RoomRepository,
};
pub use seed::seed_rooms;
