//! Ledger forms and views

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_billing::{Expense, PaymentStatus, RECOGNIZED_CATEGORIES};
use infra_db::PaymentWithGuest;

use crate::dto::guests::GuestView;

/// Payment form posted from the transactions page
///
/// The amount stays a string here; numeric parsing belongs to the
/// domain and its failure becomes a flash, not an extraction error.
#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub guest_id: Uuid,
    pub amount: String,
    pub status: String,
    pub bill_id: Option<Uuid>,
}

/// Expense form posted from the transactions page
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    pub category: String,
    pub description: Option<String>,
    pub amount: String,
}

/// Payment as shown in the ledger
#[derive(Debug, Serialize)]
pub struct PaymentView {
    pub id: Uuid,
    pub guest_name: String,
    pub amount: Decimal,
    pub status: String,
    pub bill_id: Option<Uuid>,
    pub recorded_at: DateTime<Utc>,
}

impl From<PaymentWithGuest> for PaymentView {
    fn from(row: PaymentWithGuest) -> Self {
        Self {
            id: *row.payment.id.as_uuid(),
            guest_name: row.guest_name,
            amount: row.payment.amount.amount(),
            status: row.payment.status.as_str().to_string(),
            bill_id: row.payment.bill_id.map(|id| *id.as_uuid()),
            recorded_at: row.payment.recorded_at,
        }
    }
}

/// Expense as shown in the ledger
#[derive(Debug, Serialize)]
pub struct ExpenseView {
    pub id: Uuid,
    pub category: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseView {
    fn from(expense: Expense) -> Self {
        Self {
            id: *expense.id.as_uuid(),
            category: expense.category,
            description: expense.description,
            amount: expense.amount.amount(),
            recorded_at: expense.recorded_at,
        }
    }
}

/// Transactions page view model: both ledgers newest first, plus the
/// lookups the entry forms need
#[derive(Debug, Serialize)]
pub struct TransactionsView {
    pub payments: Vec<PaymentView>,
    pub expenses: Vec<ExpenseView>,
    pub guests: Vec<GuestView>,
    pub statuses: Vec<String>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}

impl TransactionsView {
    /// Status and category choices for the entry forms
    pub fn form_choices() -> (Vec<String>, Vec<String>) {
        let statuses = PaymentStatus::all()
            .iter()
            .map(|status| status.as_str().to_string())
            .collect();
        let categories = RECOGNIZED_CATEGORIES
            .iter()
            .map(|category| category.to_string())
            .collect();
        (statuses, categories)
    }
}
