//! Guest registry
//!
//! Guests are registered against exactly one room and stay on the books
//! after checkout-less departures (the model keeps a `check_out_date`
//! column, but nothing in the flow ever sets it). The `last_bill_date`
//! anchor drives billing: each bill covers the span since the previous
//! bill, or since check-in for a guest never billed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{GuestId, RoomId};

use crate::error::LodgingError;

/// Date format accepted on intake forms
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A registered guest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier
    pub id: GuestId,
    /// Legal full name
    pub full_name: String,
    /// National identity number (unique in the registry)
    pub citizen_number: String,
    /// Contact email (unique in the registry)
    pub email: String,
    /// Emergency contact phone number
    pub emergency_contact: String,
    /// Home address
    pub address: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Meal preference recorded at intake
    pub food_preference: String,
    /// Date the guest moved in
    pub check_in_date: NaiveDate,
    /// Date the guest moved out (never set by the current flow)
    pub check_out_date: Option<NaiveDate>,
    /// Date the guest was last billed
    pub last_bill_date: Option<NaiveDate>,
    /// The room this guest holds
    pub room_id: RoomId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Start of the next billing period: the last bill date, or the
    /// check-in date for a guest who has never been billed
    pub fn billing_anchor(&self) -> NaiveDate {
        self.last_bill_date.unwrap_or(self.check_in_date)
    }
}

/// Intake form data for registering a guest
///
/// Dates arrive as `%Y-%m-%d` strings; parsing failures surface as
/// validation errors before anything is written.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GuestRegistration {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Citizen number is required"))]
    pub citizen_number: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Emergency contact is required"))]
    pub emergency_contact: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub date_of_birth: String,
    #[validate(length(min = 1, message = "Food preference is required"))]
    pub food_preference: String,
    pub check_in_date: String,
}

impl GuestRegistration {
    /// Validates the form fields and builds a `Guest` assigned to the
    /// given room
    pub fn into_guest(self, room_id: RoomId) -> Result<Guest, LodgingError> {
        self.validate()?;

        let date_of_birth = parse_form_date(&self.date_of_birth, "date of birth")?;
        let check_in_date = parse_form_date(&self.check_in_date, "check-in date")?;

        Ok(Guest {
            id: GuestId::new_v7(),
            full_name: self.full_name,
            citizen_number: self.citizen_number,
            email: self.email,
            emergency_contact: self.emergency_contact,
            address: self.address,
            date_of_birth,
            food_preference: self.food_preference,
            check_in_date,
            check_out_date: None,
            last_bill_date: None,
            room_id,
            created_at: Utc::now(),
        })
    }
}

/// Parses an intake-form date, naming the field in the error
pub fn parse_form_date(value: &str, field: &str) -> Result<NaiveDate, LodgingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| LodgingError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> GuestRegistration {
        GuestRegistration {
            full_name: "Asha Verma".to_string(),
            citizen_number: "9876-5432-1098".to_string(),
            email: "asha.verma@example.com".to_string(),
            emergency_contact: "+91-9800000001".to_string(),
            address: "14 MG Road, Pune".to_string(),
            date_of_birth: "1999-04-12".to_string(),
            food_preference: "Veg".to_string(),
            check_in_date: "2025-06-01".to_string(),
        }
    }

    #[test]
    fn test_registration_builds_guest() {
        let guest = registration().into_guest(RoomId::new()).unwrap();

        assert_eq!(guest.full_name, "Asha Verma");
        assert_eq!(
            guest.check_in_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert!(guest.check_out_date.is_none());
        assert!(guest.last_bill_date.is_none());
    }

    #[test]
    fn test_registration_rejects_bad_email() {
        let mut form = registration();
        form.email = "not-an-email".to_string();

        let result = form.into_guest(RoomId::new());
        assert!(matches!(result, Err(LodgingError::Validation(_))));
    }

    #[test]
    fn test_registration_rejects_unparsable_date() {
        let mut form = registration();
        form.check_in_date = "01/06/2025".to_string();

        let result = form.into_guest(RoomId::new());
        assert!(matches!(result, Err(LodgingError::InvalidDate { .. })));
    }

    #[test]
    fn test_registration_rejects_empty_name() {
        let mut form = registration();
        form.full_name = String::new();

        let result = form.into_guest(RoomId::new());
        assert!(matches!(result, Err(LodgingError::Validation(_))));
    }

    #[test]
    fn test_billing_anchor_prefers_last_bill_date() {
        let mut guest = registration().into_guest(RoomId::new()).unwrap();
        assert_eq!(guest.billing_anchor(), guest.check_in_date);

        let billed = NaiveDate::from_ymd_opt(2025, 7, 27).unwrap();
        guest.last_bill_date = Some(billed);
        assert_eq!(guest.billing_anchor(), billed);
    }
}
