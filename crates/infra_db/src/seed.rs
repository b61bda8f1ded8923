//! Sample-data seeding
//!
//! A fresh install starts with an empty catalog, which makes the intake
//! forms unusable. Seeding runs at startup and inserts a small starter
//! catalog exactly once.

use tracing::{debug, info};

use domain_lodging::{Room, RoomType};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::RoomRepository;

/// Rooms created on first startup
const STARTER_ROOMS: [(&str, RoomType); 6] = [
    ("101", RoomType::Single),
    ("102", RoomType::Single),
    ("201", RoomType::Triple),
    ("202", RoomType::Triple),
    ("301", RoomType::Quad),
    ("302", RoomType::Quad),
];

/// Seeds the starter room catalog if the rooms table is empty
///
/// Calling this on an already-populated database is a no-op, so it is
/// safe to run on every startup.
pub async fn seed_rooms(pool: &DatabasePool) -> Result<(), DatabaseError> {
    let rooms = RoomRepository::new(pool.clone());

    if rooms.count().await? > 0 {
        debug!("Room catalog already populated, skipping seed");
        return Ok(());
    }

    for (number, room_type) in STARTER_ROOMS {
        let room = Room::new(number, room_type).expect("starter room numbers are non-blank");
        rooms.insert(&room).await?;
    }

    info!(count = STARTER_ROOMS.len(), "Seeded starter room catalog");
    Ok(())
}
