//! Room handlers

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Form, Json};
use tracing::info;

use domain_lodging::{Room, RoomType};
use infra_db::RoomRepository;

use crate::dto::rooms::{CreateRoomForm, RoomView, RoomsView};
use crate::error::{log_failure, WebError};
use crate::flash::{FlashCode, FlashParams};
use crate::AppState;

/// Lists every room with its occupancy
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> Result<Json<RoomsView>, WebError> {
    let rooms = RoomRepository::new(state.pool.clone()).list_all().await?;

    Ok(Json(RoomsView {
        rooms: rooms.into_iter().map(RoomView::from).collect(),
        flash: FlashCode::resolve(params.flash.as_deref()),
    }))
}

/// Adds a room to the catalog
///
/// The rate comes from the posted room type, never from the form.
pub async fn create_room(
    State(state): State<AppState>,
    Form(form): Form<CreateRoomForm>,
) -> Redirect {
    match try_create(&state, form).await {
        Ok(number) => {
            info!(room = %number, "Added room");
            FlashCode::RoomCreated.redirect_to("/rooms")
        }
        Err(err) => {
            log_failure("Room creation", &err);
            FlashCode::RoomFailed.redirect_to("/rooms")
        }
    }
}

async fn try_create(state: &AppState, form: CreateRoomForm) -> Result<String, WebError> {
    let room_type: RoomType = form.room_type.parse()?;
    let room = Room::new(form.room_number, room_type)?;
    RoomRepository::new(state.pool.clone()).insert(&room).await?;
    Ok(room.room_number)
}
