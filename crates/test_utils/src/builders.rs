//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use core_kernel::RoomId;
use domain_lodging::guest::DATE_FORMAT;
use domain_lodging::{Guest, GuestRegistration, Room, RoomType};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for constructing test rooms
pub struct TestRoomBuilder {
    room_number: String,
    room_type: RoomType,
}

impl Default for TestRoomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRoomBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            room_number: "101".to_string(),
            room_type: RoomType::Single,
        }
    }

    /// Sets the room number
    pub fn with_room_number(mut self, number: impl Into<String>) -> Self {
        self.room_number = number.into();
        self
    }

    /// Sets the room type
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Builds the room; the rate falls out of the type
    pub fn build(self) -> Room {
        Room::new(self.room_number, self.room_type).expect("builder room number is valid")
    }
}

/// Builder for constructing test guest registrations
pub struct TestGuestBuilder {
    full_name: String,
    citizen_number: String,
    email: String,
    emergency_contact: String,
    address: String,
    date_of_birth: String,
    food_preference: String,
    check_in_date: String,
}

impl Default for TestGuestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGuestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            full_name: StringFixtures::guest_name().to_string(),
            citizen_number: StringFixtures::citizen_number().to_string(),
            email: StringFixtures::email().to_string(),
            emergency_contact: StringFixtures::emergency_contact().to_string(),
            address: StringFixtures::address().to_string(),
            date_of_birth: TemporalFixtures::date_of_birth()
                .format(DATE_FORMAT)
                .to_string(),
            food_preference: StringFixtures::food_preference().to_string(),
            check_in_date: TemporalFixtures::check_in().format(DATE_FORMAT).to_string(),
        }
    }

    /// Creates a builder whose identity fields are unique per index, for
    /// registering several guests side by side
    pub fn nth(index: u32) -> Self {
        Self::new()
            .with_full_name(format!("Guest {index}"))
            .with_email(format!("guest{index}@example.com"))
            .with_citizen_number(format!("CIT-{index:04}"))
    }

    /// Sets the full name
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    /// Sets the citizen number
    pub fn with_citizen_number(mut self, number: impl Into<String>) -> Self {
        self.citizen_number = number.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the check-in date
    pub fn with_check_in_date(mut self, date: NaiveDate) -> Self {
        self.check_in_date = date.format(DATE_FORMAT).to_string();
        self
    }

    /// Sets the check-in date from a raw form string
    pub fn with_check_in_raw(mut self, value: impl Into<String>) -> Self {
        self.check_in_date = value.into();
        self
    }

    /// Builds the intake form as the web layer would see it
    pub fn registration(self) -> GuestRegistration {
        GuestRegistration {
            full_name: self.full_name,
            citizen_number: self.citizen_number,
            email: self.email,
            emergency_contact: self.emergency_contact,
            address: self.address,
            date_of_birth: self.date_of_birth,
            food_preference: self.food_preference,
            check_in_date: self.check_in_date,
        }
    }

    /// Builds a validated guest assigned to the given room
    pub fn build(self, room_id: RoomId) -> Guest {
        self.registration()
            .into_guest(room_id)
            .expect("builder registration is valid")
    }
}
