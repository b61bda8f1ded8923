//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Explicit queries returning fully-materialized records
//! - Transactions around multi-row invariants (the occupancy flip on
//!   registration, the billing-anchor advance on bill creation)
//! - No lazy loading; joins are written out where a view needs them

pub mod bills;
pub mod guests;
pub mod ledger;
pub mod rooms;

pub use bills::{BillRepository, BillWithGuest};
pub use guests::GuestRepository;
pub use ledger::{LedgerRepository, PaymentWithGuest};
pub use rooms::RoomRepository;
