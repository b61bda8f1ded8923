//! Billing Domain - Bills, Ledger, and Monthly Summaries
//!
//! This crate implements the hostel's billing arithmetic and ledger
//! records, keeping the conventions the books have always used:
//!
//! # Billing Convention
//!
//! - The daily rate is the room's monthly rate divided by a fixed 30,
//!   regardless of the calendar month. A 31-day period costs more than
//!   one month's rate; a 28-day February costs less.
//! - Amounts round to two decimal places half-to-even, only at the end
//!   of the calculation.
//! - Day counts are not validated; a reversed period flows through the
//!   arithmetic and yields a negative amount.
//!
//! # Ledger Convention
//!
//! The ledger is append-only. Mistakes are corrected with offsetting
//! entries, so negative amounts are legal on both the payment and the
//! expense side.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_billing::calculator::compute_bill;
//! use rust_decimal_macros::dec;
//!
//! let rate = Money::new(dec!(9000), Currency::INR);
//! let amount = compute_bill(rate, 30, Money::zero(Currency::INR));
//! assert_eq!(amount.amount(), dec!(9000.00));
//! ```

pub mod bill;
pub mod calculator;
pub mod error;
pub mod ledger;
pub mod report;

pub use bill::Bill;
pub use calculator::{compute_bill, compute_bill_for_period, BillComputation, MONTH_DIVISOR};
pub use error::BillingError;
pub use ledger::{parse_amount, Expense, Payment, PaymentStatus, RECOGNIZED_CATEGORIES};
pub use report::MonthlySummary;
