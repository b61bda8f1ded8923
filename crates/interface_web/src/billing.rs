//! Bill generation and the scheduled billing sweep
//!
//! Both ways a bill comes into being land here: the manual form post and
//! the day-27 sweep run by the timer. A bill is rendered to PDF first
//! and persisted second; if the insert then fails the document is left
//! on disk with no row pointing at it, which keeps the books append-only
//! at the cost of the occasional orphaned file.

use chrono::{Datelike, Local, NaiveDate};
use tracing::{info, warn};

use core_kernel::{days_between, Currency, GuestId, Money, MonthRef};
use domain_billing::{compute_bill, compute_bill_for_period, Bill, BillComputation};
use domain_lodging::{Guest, Room};
use infra_db::{BillRepository, GuestRepository, RoomRepository};
use infra_docs::{render_bill, BillSheet};

use crate::error::WebError;
use crate::AppState;

/// Day of the month the sweep bills every guest on
pub const BILLING_DAY: u32 = 27;

/// Data behind the bill form: the guest, their room, and the computed
/// default period
#[derive(Debug, Clone)]
pub struct BillPreview {
    pub guest: Guest,
    pub room: Room,
    pub computation: BillComputation,
}

/// Computes the zero-discount default shown on the bill form: the span
/// from the guest's billing anchor to today. Persists nothing.
pub async fn default_bill_preview(
    state: &AppState,
    guest_id: GuestId,
) -> Result<BillPreview, WebError> {
    let guest = GuestRepository::new(state.pool.clone()).get_by_id(guest_id).await?;
    let room = RoomRepository::new(state.pool.clone()).get_by_id(guest.room_id).await?;

    let today = Local::now().date_naive();
    let computation = compute_bill_for_period(
        room.monthly_rate,
        guest.billing_anchor(),
        today,
        Money::zero(Currency::INR),
    );

    Ok(BillPreview { guest, room, computation })
}

/// Generates one bill for `total_days` at the room's current rate
///
/// Loads the guest and room, renders the PDF, then inserts the bill and
/// advances the guest's billing anchor to `today` in one transaction.
/// `today` also decides which month the bill files under. A render
/// failure aborts before anything is persisted.
pub async fn generate_bill_for_guest(
    state: &AppState,
    guest_id: GuestId,
    total_days: i64,
    discount: Money,
    today: NaiveDate,
) -> Result<Bill, WebError> {
    let guest = GuestRepository::new(state.pool.clone()).get_by_id(guest_id).await?;
    let room = RoomRepository::new(state.pool.clone()).get_by_id(guest.room_id).await?;

    let total_amount = compute_bill(room.monthly_rate, total_days, discount);
    let billing_month = MonthRef::containing(today);

    let documents = state.documents.clone();
    let guest_name = guest.full_name.clone();
    let room_number = room.room_number.clone();
    let room_type = room.room_type;
    let monthly_rate = room.monthly_rate;
    let document_path = tokio::task::spawn_blocking(move || {
        let sheet = BillSheet {
            guest_name: &guest_name,
            room_number: &room_number,
            room_type: room_type.label(),
            billing_month,
            bill_date: Local::now().naive_local(),
            total_days,
            monthly_rate,
            discount,
            total_amount,
        };
        render_bill(&documents, &sheet)
    })
    .await
    .map_err(|err| WebError::Internal(err.to_string()))??;

    let bill = Bill::new(
        guest.id,
        room.id,
        billing_month,
        total_days,
        discount,
        total_amount,
        document_path,
    );
    BillRepository::new(state.pool.clone()).create(&bill, today).await?;

    info!(
        guest = %guest.full_name,
        amount = %bill.total_amount,
        month = %billing_month.label(),
        "Generated bill"
    );
    Ok(bill)
}

/// Runs the scheduled sweep if `today` is the billing day
///
/// Off the billing day this is a no-op, so the timer can invoke it as
/// often as it likes. On the billing day every guest is billed for the
/// full span since their anchor with no discount; a second run on the
/// same day bills everyone again. Guests that fail individually are
/// logged and skipped, and the count of bills actually raised is
/// returned.
pub async fn sweep_if_billing_day(state: &AppState, today: NaiveDate) -> Result<u32, WebError> {
    if today.day() != BILLING_DAY {
        return Ok(0);
    }

    let guests = GuestRepository::new(state.pool.clone()).list_all().await?;
    info!(guests = guests.len(), "Billing day sweep starting");

    let mut billed = 0u32;
    for guest in guests {
        let total_days = days_between(guest.billing_anchor(), today);
        match generate_bill_for_guest(
            state,
            guest.id,
            total_days,
            Money::zero(Currency::INR),
            today,
        )
        .await
        {
            Ok(_) => billed += 1,
            Err(err) => {
                warn!(
                    guest = %guest.full_name,
                    error = %err,
                    "Skipping guest in billing sweep"
                );
            }
        }
    }

    info!(billed, "Billing day sweep finished");
    Ok(billed)
}
