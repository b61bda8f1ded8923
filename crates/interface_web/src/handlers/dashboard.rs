//! Dashboard handler

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use tracing::error;

use core_kernel::MonthRef;
use domain_billing::MonthlySummary;
use infra_db::{BillRepository, GuestRepository, LedgerRepository, RoomRepository};

use crate::dto::bills::BillView;
use crate::dto::dashboard::DashboardView;
use crate::error::WebError;
use crate::AppState;

/// Number of recent bills shown on the landing page
const RECENT_BILLS: i64 = 5;

/// Landing page stats
///
/// The landing page must come up even when the store is unhappy, so a
/// failed query is logged and answered with zeroed stats instead of an
/// error page.
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardView> {
    match load_stats(&state).await {
        Ok(view) => Json(view),
        Err(err) => {
            error!(error = %err, "Dashboard stats failed, serving zeroed stats");
            Json(DashboardView::default())
        }
    }
}

async fn load_stats(state: &AppState) -> Result<DashboardView, WebError> {
    let rooms = RoomRepository::new(state.pool.clone());
    let total_rooms = rooms.count().await?;
    let occupied_rooms = rooms.count_occupied().await?;
    let total_guests = GuestRepository::new(state.pool.clone()).count().await?;

    let month = MonthRef::current();
    let ledger = LedgerRepository::new(state.pool.clone());
    let payments = ledger.payments_for_month(month).await?;
    let expenses = ledger.expenses_for_month(month).await?;
    let summary = MonthlySummary::from_amounts(
        payments.iter().map(|p| p.payment.amount),
        expenses.iter().map(|e| e.amount),
    );

    let recent = BillRepository::new(state.pool.clone())
        .list_recent_with_guests(RECENT_BILLS)
        .await?;

    Ok(DashboardView {
        total_guests,
        total_rooms,
        occupied_rooms,
        available_rooms: total_rooms - occupied_rooms,
        occupancy_rate: occupancy_rate(occupied_rooms, total_rooms),
        monthly_income: summary.total_income.amount(),
        monthly_expenses: summary.total_expenses.amount(),
        net_balance: summary.net_balance().amount(),
        recent_bills: recent.into_iter().map(BillView::from).collect(),
    })
}

/// Occupied share of the catalog as a percentage with two decimals;
/// zero when there are no rooms at all
fn occupancy_rate(occupied: i64, total: i64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    let mut rate = Decimal::from(occupied * 100) / Decimal::from(total);
    rate = rate.round_dp(2);
    rate.rescale(2);
    rate
}
