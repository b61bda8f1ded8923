//! Comprehensive tests for domain_lodging

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::RoomId;
use domain_lodging::{Guest, GuestRegistration, LodgingError, Room, RoomType};

fn sample_registration() -> GuestRegistration {
    GuestRegistration {
        full_name: "Ravi Kumar".to_string(),
        citizen_number: "1122-3344-5566".to_string(),
        email: "ravi.kumar@example.com".to_string(),
        emergency_contact: "+91-9800000002".to_string(),
        address: "5 Residency Road, Bengaluru".to_string(),
        date_of_birth: "2001-11-30".to_string(),
        food_preference: "Non-Veg".to_string(),
        check_in_date: "2025-05-15".to_string(),
    }
}

// ============================================================================
// Room Type Tests
// ============================================================================

mod room_type_tests {
    use super::*;

    #[test]
    fn test_recognized_labels_parse() {
        assert_eq!("1 seater".parse::<RoomType>().unwrap(), RoomType::Single);
        assert_eq!("3 seater".parse::<RoomType>().unwrap(), RoomType::Triple);
        assert_eq!("4 seater".parse::<RoomType>().unwrap(), RoomType::Quad);
    }

    #[test]
    fn test_unrecognized_labels_fail() {
        for label in ["2 seater", "single", "1seater", "1 Seater", ""] {
            let result = label.parse::<RoomType>();
            assert!(
                matches!(result, Err(LodgingError::UnknownRoomType(_))),
                "expected '{label}' to be rejected"
            );
        }
    }

    #[test]
    fn test_rate_table() {
        assert_eq!(RoomType::Single.monthly_rate().amount(), dec!(12000));
        assert_eq!(RoomType::Triple.monthly_rate().amount(), dec!(10000));
        assert_eq!(RoomType::Quad.monthly_rate().amount(), dec!(9000));
    }

    #[test]
    fn test_display_matches_label() {
        for room_type in RoomType::all() {
            assert_eq!(room_type.to_string(), room_type.label());
        }
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for room_type in RoomType::all() {
            let parsed: RoomType = room_type.label().parse().unwrap();
            assert_eq!(parsed, room_type);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&RoomType::Triple).unwrap();
        assert_eq!(json, "\"3 seater\"");

        let back: RoomType = serde_json::from_str("\"4 seater\"").unwrap();
        assert_eq!(back, RoomType::Quad);
    }
}

// ============================================================================
// Room Tests
// ============================================================================

mod room_tests {
    use super::*;

    #[test]
    fn test_new_room_starts_vacant() {
        let room = Room::new("201", RoomType::Triple).unwrap();

        assert_eq!(room.room_number, "201");
        assert!(!room.occupied);
        assert!(room.is_available());
    }

    #[test]
    fn test_new_room_derives_rate_from_type() {
        let room = Room::new("301", RoomType::Quad).unwrap();
        assert_eq!(room.monthly_rate, RoomType::Quad.monthly_rate());
    }

    #[test]
    fn test_blank_room_number_rejected() {
        assert!(Room::new("", RoomType::Single).is_err());
        assert!(Room::new("   ", RoomType::Single).is_err());
    }

    #[test]
    fn test_occupied_room_is_not_available() {
        let mut room = Room::new("101", RoomType::Single).unwrap();
        room.occupied = true;
        assert!(!room.is_available());
    }
}

// ============================================================================
// Guest Registration Tests
// ============================================================================

mod registration_tests {
    use super::*;

    #[test]
    fn test_valid_registration_builds_guest() {
        let room_id = RoomId::new();
        let guest: Guest = sample_registration().into_guest(room_id).unwrap();

        assert_eq!(guest.room_id, room_id);
        assert_eq!(guest.email, "ravi.kumar@example.com");
        assert_eq!(
            guest.date_of_birth,
            NaiveDate::from_ymd_opt(2001, 11, 30).unwrap()
        );
        assert_eq!(
            guest.check_in_date,
            NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
        );
    }

    #[test]
    fn test_new_guest_has_no_bill_history() {
        let guest = sample_registration().into_guest(RoomId::new()).unwrap();

        assert!(guest.last_bill_date.is_none());
        assert!(guest.check_out_date.is_none());
        assert_eq!(guest.billing_anchor(), guest.check_in_date);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = sample_registration();
        form.email = "ravi-at-example".to_string();

        assert!(matches!(
            form.into_guest(RoomId::new()),
            Err(LodgingError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        for field in ["full_name", "citizen_number", "emergency_contact"] {
            let mut form = sample_registration();
            match field {
                "full_name" => form.full_name = String::new(),
                "citizen_number" => form.citizen_number = String::new(),
                _ => form.emergency_contact = String::new(),
            }

            assert!(
                form.into_guest(RoomId::new()).is_err(),
                "expected empty {field} to be rejected"
            );
        }
    }

    #[test]
    fn test_unparsable_date_of_birth_rejected() {
        let mut form = sample_registration();
        form.date_of_birth = "30-11-2001".to_string();

        let result = form.into_guest(RoomId::new());
        match result {
            Err(LodgingError::InvalidDate { field, .. }) => {
                assert_eq!(field, "date of birth");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_check_in_rejected() {
        let mut form = sample_registration();
        form.check_in_date = "yesterday".to_string();

        let result = form.into_guest(RoomId::new());
        assert!(matches!(result, Err(LodgingError::InvalidDate { .. })));
    }

    #[test]
    fn test_billing_anchor_moves_with_last_bill() {
        let mut guest = sample_registration().into_guest(RoomId::new()).unwrap();

        let billed_on = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        guest.last_bill_date = Some(billed_on);

        assert_eq!(guest.billing_anchor(), billed_on);
    }
}
