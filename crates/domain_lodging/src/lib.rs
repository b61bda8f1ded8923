//! Lodging Domain - Rooms and Guests
//!
//! This crate models the hostel's lodging inventory and its residents:
//!
//! - **Rooms** are a small fixed catalog. Each room carries a seat-count
//!   type ("1 seater", "3 seater", "4 seater") that fully determines its
//!   monthly rate, and a single occupancy flag.
//! - **Guests** are registered against exactly one vacant room, which is
//!   marked occupied in the same operation. Identity fields (citizen
//!   number, email) are unique across the registry.
//!
//! The crate is pure domain logic; persistence and the occupancy handoff
//! transaction live in `infra_db`.

pub mod error;
pub mod guest;
pub mod room;

pub use error::LodgingError;
pub use guest::{Guest, GuestRegistration};
pub use room::{Room, RoomType};
