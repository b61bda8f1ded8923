//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the hostel
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::NaiveDate;
use core_kernel::{BillId, Currency, GuestId, Money, MonthRef, RoomId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates an INR amount
    pub fn inr(amount: Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    /// Creates a zero INR amount
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// Monthly rate of a 1 seater room
    pub fn single_rate() -> Money {
        Money::new(dec!(12000), Currency::INR)
    }

    /// Monthly rate of a 4 seater room
    pub fn quad_rate() -> Money {
        Money::new(dec!(9000), Currency::INR)
    }

    /// A discount small enough to keep bills positive
    pub fn small_discount() -> Money {
        Money::new(dec!(500), Currency::INR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard check-in date (Jun 1, 2025)
    pub fn check_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    /// A billing day: the 27th (Aug 27, 2025)
    pub fn billing_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 27).unwrap()
    }

    /// The day before the billing day (Aug 26, 2025)
    pub fn off_billing_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 26).unwrap()
    }

    /// Standard date of birth for a test guest
    pub fn date_of_birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1998, 5, 14).unwrap()
    }

    /// The month the billing-day fixtures fall in
    pub fn august_2025() -> MonthRef {
        MonthRef::new(2025, 8).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic guest ID for testing
    pub fn guest_id() -> GuestId {
        GuestId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic room ID for testing
    pub fn room_id() -> RoomId {
        RoomId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic bill ID for testing
    pub fn bill_id() -> BillId {
        BillId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Test guest name
    pub fn guest_name() -> &'static str {
        "Asha Verma"
    }

    /// Test email address
    pub fn email() -> &'static str {
        "asha.verma@example.com"
    }

    /// Test citizen number
    pub fn citizen_number() -> &'static str {
        "9812-4455-7788"
    }

    /// Test emergency contact
    pub fn emergency_contact() -> &'static str {
        "+91-9800000000"
    }

    /// Test postal address
    pub fn address() -> &'static str {
        "12 Lakeview Road, Pune"
    }

    /// Test food preference
    pub fn food_preference() -> &'static str {
        "Veg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_fixtures_are_inr() {
        assert_eq!(MoneyFixtures::single_rate().currency(), Currency::INR);
        assert_eq!(MoneyFixtures::quad_rate().amount(), dec!(9000));
        assert!(MoneyFixtures::inr_zero().is_zero());
    }

    #[test]
    fn test_billing_day_fixtures_fall_in_august() {
        let month = TemporalFixtures::august_2025();
        assert!(month.contains(TemporalFixtures::billing_day()));
        assert!(month.contains(TemporalFixtures::off_billing_day()));
    }

    #[test]
    fn test_id_fixtures_are_deterministic() {
        assert_eq!(IdFixtures::guest_id(), IdFixtures::guest_id());
        assert_eq!(IdFixtures::room_id(), IdFixtures::room_id());
    }
}
