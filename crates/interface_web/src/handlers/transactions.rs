//! Ledger handlers: payments in, expenses out

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use tracing::info;

use core_kernel::{BillId, GuestId};
use domain_billing::{parse_amount, Expense, Payment, PaymentStatus};
use infra_db::{GuestRepository, LedgerRepository};

use crate::dto::guests::GuestView;
use crate::dto::transactions::{
    ExpenseForm, ExpenseView, PaymentForm, PaymentView, TransactionsView,
};
use crate::error::{log_failure, WebError};
use crate::flash::{FlashCode, FlashParams};
use crate::AppState;

/// Both ledgers newest first, plus the lookups the entry forms need
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<Json<TransactionsView>, WebError> {
    let ledger = LedgerRepository::new(state.pool.clone());
    let payments = ledger.list_payments().await?;
    let expenses = ledger.list_expenses().await?;
    let guests = GuestRepository::new(state.pool.clone()).list_all().await?;

    let (statuses, categories) = TransactionsView::form_choices();
    Ok(Json(TransactionsView {
        payments: payments.into_iter().map(PaymentView::from).collect(),
        expenses: expenses.into_iter().map(ExpenseView::from).collect(),
        guests: guests.into_iter().map(GuestView::from).collect(),
        statuses,
        categories,
        flash: FlashCode::resolve(params.flash.as_deref()),
    }))
}

/// Appends a payment to the ledger
pub async fn record_payment(
    State(state): State<AppState>,
    Form(form): Form<PaymentForm>,
) -> Redirect {
    match try_record_payment(&state, form).await {
        Ok(payment) => {
            info!(payment = %payment.id, amount = %payment.amount, "Recorded payment");
            FlashCode::PaymentRecorded.redirect_to("/transactions")
        }
        Err(err) => {
            log_failure("Payment", &err);
            FlashCode::PaymentFailed.redirect_to("/transactions")
        }
    }
}

async fn try_record_payment(state: &AppState, form: PaymentForm) -> Result<Payment, WebError> {
    let amount = parse_amount(&form.amount)?;
    let status: PaymentStatus = form.status.parse()?;

    let mut payment = Payment::new(GuestId::from_uuid(form.guest_id), amount, status);
    if let Some(bill_id) = form.bill_id {
        payment = payment.with_bill(BillId::from_uuid(bill_id));
    }

    LedgerRepository::new(state.pool.clone()).record_payment(&payment).await?;
    Ok(payment)
}

/// Appends an expense to the ledger
pub async fn record_expense(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Redirect {
    match try_record_expense(&state, form).await {
        Ok(expense) => {
            info!(expense = %expense.id, amount = %expense.amount, "Recorded expense");
            FlashCode::ExpenseRecorded.redirect_to("/transactions")
        }
        Err(err) => {
            log_failure("Expense", &err);
            FlashCode::ExpenseFailed.redirect_to("/transactions")
        }
    }
}

async fn try_record_expense(state: &AppState, form: ExpenseForm) -> Result<Expense, WebError> {
    let amount = parse_amount(&form.amount)?;

    let mut expense = Expense::new(form.category, amount);
    if let Some(description) = form.description.filter(|d| !d.trim().is_empty()) {
        expense = expense.with_description(description);
    }

    LedgerRepository::new(state.pool.clone()).record_expense(&expense).await?;
    Ok(expense)
}
