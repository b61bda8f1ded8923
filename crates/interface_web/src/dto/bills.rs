//! Bill forms and views

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use infra_db::BillWithGuest;

use crate::dto::guests::GuestView;
use crate::dto::rooms::RoomView;

/// Form posted from the bill page
///
/// The discount is optional; an absent or blank field means none.
#[derive(Debug, Deserialize)]
pub struct GenerateBillForm {
    pub total_days: i64,
    pub discount: Option<String>,
}

/// Bill as shown on the dashboard
#[derive(Debug, Serialize)]
pub struct BillView {
    pub id: Uuid,
    pub guest_name: String,
    pub billing_month: String,
    pub total_days: i64,
    pub discount: Decimal,
    pub total_amount: Decimal,
    pub generated_at: DateTime<Utc>,
    pub document_path: String,
}

impl From<BillWithGuest> for BillView {
    fn from(row: BillWithGuest) -> Self {
        Self {
            id: *row.bill.id.as_uuid(),
            guest_name: row.guest_name,
            billing_month: row.bill.billing_month.label(),
            total_days: row.bill.total_days,
            discount: row.bill.discount.amount(),
            total_amount: row.bill.total_amount.amount(),
            generated_at: row.bill.generated_at,
            document_path: row.bill.document_path,
        }
    }
}

/// Bill form view model: the guest, their room, and the zero-discount
/// default for the period since the billing anchor
#[derive(Debug, Serialize)]
pub struct BillPreviewView {
    pub guest: GuestView,
    pub room: RoomView,
    pub default_days: i64,
    pub default_amount: Decimal,
}
