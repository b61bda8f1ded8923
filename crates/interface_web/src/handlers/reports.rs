//! Monthly report handler

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use core_kernel::MonthRef;
use domain_billing::MonthlySummary;
use infra_db::LedgerRepository;
use infra_docs::{render_monthly_report, IncomeRow};

use crate::dto::reports::{ReportParams, ReportView};
use crate::dto::transactions::{ExpenseView, PaymentView};
use crate::error::WebError;
use crate::AppState;

/// Builds the month's financial report and renders its PDF
///
/// Defaults to the current month when the query names none. The PDF is
/// re-rendered on every request, replacing the previous file for that
/// month.
pub async fn monthly_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportView>, WebError> {
    let current = MonthRef::current();
    let month = MonthRef::new(
        params.year.unwrap_or(current.year()),
        params.month.unwrap_or(current.month()),
    )?;

    let ledger = LedgerRepository::new(state.pool.clone());
    let payments = ledger.payments_for_month(month).await?;
    let expenses = ledger.expenses_for_month(month).await?;

    let summary = MonthlySummary::from_amounts(
        payments.iter().map(|p| p.payment.amount),
        expenses.iter().map(|e| e.amount),
    );

    let income_rows: Vec<IncomeRow> = payments
        .iter()
        .map(|p| IncomeRow {
            recorded_at: p.payment.recorded_at,
            guest_name: p.guest_name.clone(),
            amount: p.payment.amount,
            status: p.payment.status,
        })
        .collect();

    let documents = state.documents.clone();
    let expense_rows = expenses.clone();
    let document_path = tokio::task::spawn_blocking(move || {
        render_monthly_report(&documents, month, &income_rows, &expense_rows)
    })
    .await
    .map_err(|err| WebError::Internal(err.to_string()))??;

    info!(month = %month.label(), path = %document_path, "Rendered monthly report");

    Ok(Json(ReportView {
        month_label: month.label(),
        year: month.year(),
        month: month.month(),
        total_income: summary.total_income.amount(),
        total_expenses: summary.total_expenses.amount(),
        net_balance: summary.net_balance().amount(),
        payments: payments.into_iter().map(PaymentView::from).collect(),
        expenses: expenses.into_iter().map(ExpenseView::from).collect(),
        document_path,
    }))
}
