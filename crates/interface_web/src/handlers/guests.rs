//! Guest handlers

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use tracing::info;

use core_kernel::RoomId;
use infra_db::{GuestRepository, RoomRepository};

use crate::dto::guests::{GuestView, GuestsView, RegisterGuestForm};
use crate::dto::rooms::RoomView;
use crate::error::{log_failure, WebError};
use crate::flash::{FlashCode, FlashParams};
use crate::AppState;

/// Lists every guest plus the rooms still open for the registration form
pub async fn list_guests(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<Json<GuestsView>, WebError> {
    let guests = GuestRepository::new(state.pool.clone()).list_all().await?;
    let available = RoomRepository::new(state.pool.clone()).list_available().await?;

    Ok(Json(GuestsView {
        guests: guests.into_iter().map(GuestView::from).collect(),
        available_rooms: available.into_iter().map(RoomView::from).collect(),
        flash: FlashCode::resolve(params.flash.as_deref()),
    }))
}

/// Registers a guest into a vacant room
///
/// Always redirects back to the guests page; the flash code says whether
/// the registration stuck.
pub async fn register_guest(
    State(state): State<AppState>,
    Form(form): Form<RegisterGuestForm>,
) -> Redirect {
    match try_register(&state, form).await {
        Ok(name) => {
            info!(guest = %name, "Registered guest");
            FlashCode::GuestRegistered.redirect_to("/guests")
        }
        Err(err) => {
            log_failure("Guest registration", &err);
            FlashCode::GuestFailed.redirect_to("/guests")
        }
    }
}

async fn try_register(state: &AppState, form: RegisterGuestForm) -> Result<String, WebError> {
    let (registration, room_id) = form.into_registration();
    let guest = registration.into_guest(RoomId::from_uuid(room_id))?;
    GuestRepository::new(state.pool.clone()).register(&guest).await?;
    Ok(guest.full_name)
}
