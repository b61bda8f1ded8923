//! Billing domain errors

use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Ledger amount failed numeric parsing
    #[error("Invalid amount: '{0}' is not a number")]
    InvalidAmount(String),

    /// Payment status string is not a recognized spelling
    #[error("Unknown payment status: {0}")]
    UnknownPaymentStatus(String),
}
