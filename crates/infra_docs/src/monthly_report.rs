//! Monthly report PDF rendering
//!
//! The report opens with the month's totals and then lists every payment
//! and expense in chronological order. Rows beyond a page simply continue
//! on the next one.

use chrono::{DateTime, Local, Utc};
use tracing::debug;

use core_kernel::{Money, MonthRef};
use domain_billing::{Expense, MonthlySummary, PaymentStatus};

use crate::error::DocumentError;
use crate::pdf::{amount_label, clip, Sheet};
use crate::store::DocumentStore;

/// One payment line in the income table, already joined with the guest
/// name
#[derive(Debug, Clone)]
pub struct IncomeRow {
    pub recorded_at: DateTime<Utc>,
    pub guest_name: String,
    pub amount: Money,
    pub status: PaymentStatus,
}

/// Renders the report for one month and returns the store-relative path.
/// The report file is keyed by month, so a re-render replaces the
/// previous one.
pub fn render_monthly_report(
    store: &DocumentStore,
    month: MonthRef,
    income: &[IncomeRow],
    expenses: &[Expense],
) -> Result<String, DocumentError> {
    let summary = MonthlySummary::from_amounts(
        income.iter().map(|row| row.amount),
        expenses.iter().map(|expense| expense.amount),
    );
    let target = store.report_path(month)?;

    let mut doc = Sheet::new("Monthly Report")?;
    doc.heading(&format!("Monthly Report - {}", month.label()));
    doc.rule();
    doc.gap(10.0);

    doc.section("Summary");
    doc.key_value("Total Income", &amount_label(&summary.total_income));
    doc.key_value("Total Expenses", &amount_label(&summary.total_expenses));
    doc.key_value_bold("Net Balance", &amount_label(&summary.net_balance()));
    doc.gap(6.0);

    doc.section("Income");
    if income.is_empty() {
        doc.line("No payments recorded this month.");
    } else {
        doc.table_header(&[
            ("Date", 25.0),
            ("Guest", 75.0),
            ("Status", 30.0),
            ("Amount", 50.0),
        ]);
        for row in income {
            doc.table_row(&[
                &row.recorded_at.format("%Y-%m-%d").to_string(),
                &clip(&row.guest_name, 34),
                row.status.as_str(),
                &amount_label(&row.amount),
            ]);
        }
    }
    doc.gap(6.0);

    doc.section("Expenses");
    if expenses.is_empty() {
        doc.line("No expenses recorded this month.");
    } else {
        doc.table_header(&[
            ("Date", 25.0),
            ("Category", 35.0),
            ("Description", 80.0),
            ("Amount", 40.0),
        ]);
        for expense in expenses {
            doc.table_row(&[
                &expense.recorded_at.format("%Y-%m-%d").to_string(),
                &clip(&expense.category, 16),
                &clip(expense.description.as_deref().unwrap_or("-"), 38),
                &amount_label(&expense.amount),
            ]);
        }
    }

    doc.footer(&format!(
        "Generated on {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    doc.save(&target.absolute)?;

    debug!(path = %target.relative, "Rendered monthly report");
    Ok(target.relative)
}
