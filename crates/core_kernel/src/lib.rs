//! Core Kernel - Foundational types and utilities for the hostel system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Calendar types for billing periods
//! - Common identifiers and value objects

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{BillId, ExpenseId, GuestId, PaymentId, RoomId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{days_between, MonthRef, TemporalError};
