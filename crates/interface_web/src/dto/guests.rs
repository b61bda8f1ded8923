//! Guest forms and views

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_lodging::{Guest, GuestRegistration};

use crate::dto::rooms::RoomView;

/// Registration form posted from the guests page
///
/// Dates arrive as strings straight off the form and are validated by
/// the domain, not here.
#[derive(Debug, Deserialize)]
pub struct RegisterGuestForm {
    pub full_name: String,
    pub citizen_number: String,
    pub email: String,
    pub emergency_contact: String,
    pub address: String,
    pub date_of_birth: String,
    pub food_preference: String,
    pub check_in_date: String,
    pub room_id: Uuid,
}

impl RegisterGuestForm {
    /// Splits the form into the domain registration and the target room
    pub fn into_registration(self) -> (GuestRegistration, Uuid) {
        let room_id = self.room_id;
        let registration = GuestRegistration {
            full_name: self.full_name,
            citizen_number: self.citizen_number,
            email: self.email,
            emergency_contact: self.emergency_contact,
            address: self.address,
            date_of_birth: self.date_of_birth,
            food_preference: self.food_preference,
            check_in_date: self.check_in_date,
        };
        (registration, room_id)
    }
}

/// Guest as shown in list views
#[derive(Debug, Serialize)]
pub struct GuestView {
    pub id: Uuid,
    pub full_name: String,
    pub citizen_number: String,
    pub email: String,
    pub emergency_contact: String,
    pub address: String,
    pub food_preference: String,
    pub check_in_date: NaiveDate,
    pub last_bill_date: Option<NaiveDate>,
    pub room_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Guest> for GuestView {
    fn from(guest: Guest) -> Self {
        Self {
            id: *guest.id.as_uuid(),
            full_name: guest.full_name,
            citizen_number: guest.citizen_number,
            email: guest.email,
            emergency_contact: guest.emergency_contact,
            address: guest.address,
            food_preference: guest.food_preference,
            check_in_date: guest.check_in_date,
            last_bill_date: guest.last_bill_date,
            room_id: *guest.room_id.as_uuid(),
            created_at: guest.created_at,
        }
    }
}

/// Guests page view model: every guest plus the rooms still open for
/// the registration form
#[derive(Debug, Serialize)]
pub struct GuestsView {
    pub guests: Vec<GuestView>,
    pub available_rooms: Vec<RoomView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}
