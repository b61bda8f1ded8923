//! Room forms and views

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_lodging::Room;

/// Form posted from the rooms page
#[derive(Debug, Deserialize)]
pub struct CreateRoomForm {
    pub room_number: String,
    pub room_type: String,
}

/// Room as shown in list views
#[derive(Debug, Serialize)]
pub struct RoomView {
    pub id: Uuid,
    pub room_number: String,
    pub room_type: String,
    pub monthly_rate: Decimal,
    pub occupied: bool,
}

impl From<Room> for RoomView {
    fn from(room: Room) -> Self {
        Self {
            id: *room.id.as_uuid(),
            room_number: room.room_number,
            room_type: room.room_type.label().to_string(),
            monthly_rate: room.monthly_rate.amount(),
            occupied: room.occupied,
        }
    }
}

/// Rooms page view model
#[derive(Debug, Serialize)]
pub struct RoomsView {
    pub rooms: Vec<RoomView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}
