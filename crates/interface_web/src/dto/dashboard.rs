//! Dashboard view model

use rust_decimal::Decimal;
use serde::Serialize;

use crate::dto::bills::BillView;

/// Landing page stats
///
/// `Default` is the zeroed fallback served when the stats queries fail;
/// the dashboard never errors.
#[derive(Debug, Default, Serialize)]
pub struct DashboardView {
    pub total_guests: i64,
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    pub available_rooms: i64,
    pub occupancy_rate: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    pub net_balance: Decimal,
    pub recent_bills: Vec<BillView>,
}
