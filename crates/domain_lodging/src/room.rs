//! Room catalog and pricing
//!
//! Rooms are let by the month at a fixed rate determined entirely by the
//! room type. The catalog is small and long-lived: rooms are created once
//! and flip between vacant and occupied as guests are registered.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, RoomId};

use crate::error::LodgingError;

/// Room categories let by the hostel
///
/// The intake forms and the catalog use the seat-count labels
/// ("1 seater", "3 seater", "4 seater"); any other spelling is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Single occupancy ("1 seater")
    #[serde(rename = "1 seater")]
    Single,
    /// Three beds ("3 seater")
    #[serde(rename = "3 seater")]
    Triple,
    /// Four beds ("4 seater")
    #[serde(rename = "4 seater")]
    Quad,
}

impl RoomType {
    /// The label used on intake forms and in the catalog
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "1 seater",
            RoomType::Triple => "3 seater",
            RoomType::Quad => "4 seater",
        }
    }

    /// Fixed monthly rate for this room type
    pub fn monthly_rate(&self) -> Money {
        let rupees = match self {
            RoomType::Single => 12_000,
            RoomType::Triple => 10_000,
            RoomType::Quad => 9_000,
        };
        Money::new(Decimal::from(rupees), Currency::INR)
    }

    /// All room types, in rate order
    pub fn all() -> [RoomType; 3] {
        [RoomType::Single, RoomType::Triple, RoomType::Quad]
    }
}

impl FromStr for RoomType {
    type Err = LodgingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1 seater" => Ok(RoomType::Single),
            "3 seater" => Ok(RoomType::Triple),
            "4 seater" => Ok(RoomType::Quad),
            other => Err(LodgingError::UnknownRoomType(other.to_string())),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A room in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: RoomId,
    /// Human-readable room number (unique in the catalog)
    pub room_number: String,
    /// Category determining the rate
    pub room_type: RoomType,
    /// Monthly rate, fixed when the room is created
    pub monthly_rate: Money,
    /// Whether a guest currently holds the room
    pub occupied: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Creates a vacant room with the rate derived from its type
    pub fn new(room_number: impl Into<String>, room_type: RoomType) -> Result<Self, LodgingError> {
        let room_number = room_number.into();
        if room_number.trim().is_empty() {
            return Err(LodgingError::validation("Room number is required"));
        }

        Ok(Self {
            id: RoomId::new_v7(),
            room_number,
            room_type,
            monthly_rate: room_type.monthly_rate(),
            occupied: false,
            created_at: Utc::now(),
        })
    }

    /// True if the room can take a new guest
    pub fn is_available(&self) -> bool {
        !self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_room_type_rates() {
        assert_eq!(RoomType::Single.monthly_rate().amount(), dec!(12000));
        assert_eq!(RoomType::Triple.monthly_rate().amount(), dec!(10000));
        assert_eq!(RoomType::Quad.monthly_rate().amount(), dec!(9000));
    }

    #[test]
    fn test_room_type_parses_recognized_labels() {
        assert_eq!("1 seater".parse::<RoomType>().unwrap(), RoomType::Single);
        assert_eq!("3 seater".parse::<RoomType>().unwrap(), RoomType::Triple);
        assert_eq!("4 seater".parse::<RoomType>().unwrap(), RoomType::Quad);
    }

    #[test]
    fn test_room_type_rejects_unknown_labels() {
        let result = "2 seater".parse::<RoomType>();
        assert!(matches!(result, Err(LodgingError::UnknownRoomType(_))));

        let result = "Single".parse::<RoomType>();
        assert!(matches!(result, Err(LodgingError::UnknownRoomType(_))));
    }

    #[test]
    fn test_new_room_is_vacant_with_derived_rate() {
        let room = Room::new("101", RoomType::Single).unwrap();
        assert!(room.is_available());
        assert_eq!(room.monthly_rate.amount(), dec!(12000));
    }

    #[test]
    fn test_new_room_rejects_blank_number() {
        let result = Room::new("   ", RoomType::Quad);
        assert!(matches!(result, Err(LodgingError::Validation(_))));
    }
}
