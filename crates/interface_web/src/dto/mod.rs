//! View models and form payloads
//!
//! Forms deserialize from classic urlencoded posts; views serialize to
//! JSON. Conversion into domain types happens here so handlers stay
//! thin.

pub mod bills;
pub mod dashboard;
pub mod guests;
pub mod reports;
pub mod rooms;
pub mod transactions;
