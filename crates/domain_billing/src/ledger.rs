//! Payment and expense ledger
//!
//! The ledger is append-only: payments received from guests and operating
//! expenses paid out. Amounts arrive from entry forms as strings and only
//! numeric parsing is enforced; negative amounts are accepted so that
//! corrections can be booked as offsetting entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BillId, Currency, ExpenseId, GuestId, Money, PaymentId};

use crate::error::BillingError;

/// Settlement status of a recorded payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Guest has been informed; money not yet received
    Pending,
    /// Money received
    Paid,
    /// Paid ahead of the bill
    Advance,
}

impl PaymentStatus {
    /// Stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Advance => "advance",
        }
    }

    /// All statuses, for entry-form dropdowns
    pub fn all() -> [PaymentStatus; 3] {
        [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Advance,
        ]
    }
}

impl FromStr for PaymentStatus {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "advance" => Ok(PaymentStatus::Advance),
            other => Err(BillingError::UnknownPaymentStatus(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment received from a guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Paying guest
    pub guest_id: GuestId,
    /// Bill being settled, if the payment is tied to one
    pub bill_id: Option<BillId>,
    /// Amount received (or corrected)
    pub amount: Money,
    /// Settlement status
    pub status: PaymentStatus,
    /// When the payment was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    /// Records a payment not tied to a particular bill
    pub fn new(guest_id: GuestId, amount: Money, status: PaymentStatus) -> Self {
        Self {
            id: PaymentId::new_v7(),
            guest_id,
            bill_id: None,
            amount,
            status,
            recorded_at: Utc::now(),
        }
    }

    /// Ties the payment to a bill
    pub fn with_bill(mut self, bill_id: BillId) -> Self {
        self.bill_id = Some(bill_id);
        self
    }
}

/// Expense categories offered by the entry form
///
/// Categories are stored free-form; this list drives the dropdown and is
/// not enforced on write.
pub const RECOGNIZED_CATEGORIES: [&str; 9] = [
    "food",
    "vegetables",
    "snacks",
    "milk",
    "electricity",
    "salary",
    "water",
    "meat",
    "essentials",
];

/// An operating expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,
    /// Free-form category
    pub category: String,
    /// Optional note
    pub description: Option<String>,
    /// Amount paid out (or corrected)
    pub amount: Money,
    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Records an expense
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new_v7(),
            category: category.into(),
            description: None,
            amount,
            recorded_at: Utc::now(),
        }
    }

    /// Attaches a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parses a ledger amount from form input
///
/// Accepts any decimal number, including negatives. Non-numeric input is
/// a validation failure and nothing is recorded.
pub fn parse_amount(input: &str) -> Result<Money, BillingError> {
    let value: Decimal = input
        .trim()
        .parse()
        .map_err(|_| BillingError::InvalidAmount(input.to_string()))?;
    Ok(Money::new(value, Currency::INR))
}
