//! Bill records
//!
//! A bill captures one billing run for one guest: the period length in
//! days, the discount applied, the resulting amount, and the path of the
//! rendered PDF. Bills are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BillId, GuestId, Money, MonthRef, RoomId};

/// A generated bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,
    /// Guest billed
    pub guest_id: GuestId,
    /// Room the guest held when billed
    pub room_id: RoomId,
    /// Month the bill was raised in
    pub billing_month: MonthRef,
    /// Days covered by this bill
    pub total_days: i64,
    /// Discount applied
    pub discount: Money,
    /// Final amount due
    pub total_amount: Money,
    /// When the bill was generated
    pub generated_at: DateTime<Utc>,
    /// Store-relative path of the rendered PDF
    pub document_path: String,
}

impl Bill {
    /// Creates a bill record for an already-computed amount
    pub fn new(
        guest_id: GuestId,
        room_id: RoomId,
        billing_month: MonthRef,
        total_days: i64,
        discount: Money,
        total_amount: Money,
        document_path: impl Into<String>,
    ) -> Self {
        Self {
            id: BillId::new_v7(),
            guest_id,
            room_id,
            billing_month,
            total_days,
            discount,
            total_amount,
            generated_at: Utc::now(),
            document_path: document_path.into(),
        }
    }
}
