//! Database Test Utilities
//!
//! The store is SQLite, so tests need no containers: every test opens a
//! private in-memory database and applies the embedded migrations. The
//! pool is capped at one connection because each SQLite `:memory:`
//! connection is its own database.

use domain_lodging::{Guest, Room, RoomType};
use infra_db::{
    create_pool, run_migrations, DatabaseConfig, DatabasePool, GuestRepository, RoomRepository,
};

use crate::builders::{TestGuestBuilder, TestRoomBuilder};

/// Opens a fresh in-memory database with the schema applied
pub async fn in_memory_pool() -> DatabasePool {
    let config = DatabaseConfig::new("sqlite::memory:").max_connections(1);
    let pool = create_pool(config).await.expect("in-memory pool opens");
    run_migrations(&pool).await.expect("migrations apply");
    pool
}

/// Inserts a room and returns it
pub async fn insert_room(pool: &DatabasePool, room_number: &str, room_type: RoomType) -> Room {
    let room = TestRoomBuilder::new()
        .with_room_number(room_number)
        .with_room_type(room_type)
        .build();
    RoomRepository::new(pool.clone())
        .insert(&room)
        .await
        .expect("room inserts");
    room
}

/// Registers the built guest into the given room and returns them
pub async fn register_guest(pool: &DatabasePool, builder: TestGuestBuilder, room: &Room) -> Guest {
    let guest = builder.build(room.id);
    GuestRepository::new(pool.clone())
        .register(&guest)
        .await
        .expect("guest registers");
    guest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_has_schema() {
        let pool = in_memory_pool().await;

        let rooms: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&pool)
            .await
            .expect("rooms table exists");
        assert_eq!(rooms, 0);
    }

    #[tokio::test]
    async fn test_helpers_seed_an_occupied_room() {
        let pool = in_memory_pool().await;

        let room = insert_room(&pool, "201", RoomType::Triple).await;
        let guest = register_guest(&pool, TestGuestBuilder::new(), &room).await;

        assert_eq!(guest.room_id, room.id);
        let occupied = RoomRepository::new(pool.clone())
            .count_occupied()
            .await
            .unwrap();
        assert_eq!(occupied, 1);
    }
}
