//! Monthly report query and view

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::transactions::{ExpenseView, PaymentView};

/// Report query parameters; both default to the current month
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Report page view model: the month's ledger, its totals, and where
/// the rendered PDF landed
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub month_label: String,
    pub year: i32,
    pub month: u32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    pub payments: Vec<PaymentView>,
    pub expenses: Vec<ExpenseView>,
    pub document_path: String,
}
