//! Bill handlers

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Local;
use uuid::Uuid;

use core_kernel::{Currency, GuestId, Money};
use domain_billing::parse_amount;

use crate::billing;
use crate::dto::bills::{BillPreviewView, GenerateBillForm};
use crate::error::{log_failure, WebError};
use crate::flash::FlashCode;
use crate::AppState;

/// Bill form data for one guest: the default period runs from the
/// billing anchor to today with no discount
pub async fn bill_preview(
    State(state): State<AppState>,
    Path(guest_id): Path<Uuid>,
) -> Result<Json<BillPreviewView>, WebError> {
    let preview = billing::default_bill_preview(&state, GuestId::from_uuid(guest_id)).await?;

    Ok(Json(BillPreviewView {
        default_days: preview.computation.total_days,
        default_amount: preview.computation.total_amount.amount(),
        guest: preview.guest.into(),
        room: preview.room.into(),
    }))
}

/// Generates a bill from the posted day count and discount
pub async fn generate_bill(
    State(state): State<AppState>,
    Path(guest_id): Path<Uuid>,
    Form(form): Form<GenerateBillForm>,
) -> Redirect {
    let back = format!("/guests/{guest_id}/bill");
    match try_generate(&state, guest_id, form).await {
        Ok(()) => FlashCode::BillGenerated.redirect_to(&back),
        Err(err) => {
            log_failure("Bill generation", &err);
            FlashCode::BillFailed.redirect_to(&back)
        }
    }
}

async fn try_generate(
    state: &AppState,
    guest_id: Uuid,
    form: GenerateBillForm,
) -> Result<(), WebError> {
    let discount = match form.discount.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_amount(raw)?,
        _ => Money::zero(Currency::INR),
    };

    billing::generate_bill_for_guest(
        state,
        GuestId::from_uuid(guest_id),
        form.total_days,
        discount,
        Local::now().date_naive(),
    )
    .await?;
    Ok(())
}
