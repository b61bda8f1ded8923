//! Room repository implementation
//!
//! Provides database access for the room catalog. Rooms carry the monthly
//! rate fixed at creation time; the occupied flag is only ever flipped
//! inside the guest registration transaction (see the guest repository).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{Currency, Money, RoomId};
use domain_lodging::{Room, RoomType};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for the room catalog
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: DatabasePool,
}

impl RoomRepository {
    /// Creates a new RoomRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a room into the catalog
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the room number is already taken
    pub async fn insert(&self, room: &Room) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO rooms (id, room_number, room_type, monthly_rate_minor, occupied, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*room.id.as_uuid())
        .bind(&room.room_number)
        .bind(room.room_type.label())
        .bind(room.monthly_rate.to_minor())
        .bind(room.occupied)
        .bind(room.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// Retrieves a room by its identifier
    pub async fn get_by_id(&self, room_id: RoomId) -> Result<Room, DatabaseError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, room_number, room_type, monthly_rate_minor, occupied, created_at
            FROM rooms
            WHERE id = ?
            "#,
        )
        .bind(*room_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Room", room_id))?;

        row.into_room()
    }

    /// Finds a room by its human-readable number
    pub async fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, DatabaseError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, room_number, room_type, monthly_rate_minor, occupied, created_at
            FROM rooms
            WHERE room_number = ?
            "#,
        )
        .bind(room_number)
        .fetch_optional(&self.pool)
        .await?;

        row.map(RoomRow::into_room).transpose()
    }

    /// All rooms, ordered by room number
    pub async fn list_all(&self) -> Result<Vec<Room>, DatabaseError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, room_number, room_type, monthly_rate_minor, occupied, created_at
            FROM rooms
            ORDER BY room_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RoomRow::into_room).collect()
    }

    /// Rooms currently without a guest, ordered by room number
    pub async fn list_available(&self) -> Result<Vec<Room>, DatabaseError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
            SELECT id, room_number, room_type, monthly_rate_minor, occupied, created_at
            FROM rooms
            WHERE occupied = 0
            ORDER BY room_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RoomRow::into_room).collect()
    }

    /// Total number of rooms in the catalog
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Number of rooms currently holding a guest
    pub async fn count_occupied(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms WHERE occupied = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Database row for a room
#[derive(Debug, Clone, FromRow)]
struct RoomRow {
    id: Uuid,
    room_number: String,
    room_type: String,
    monthly_rate_minor: i64,
    occupied: bool,
    created_at: DateTime<Utc>,
}

impl RoomRow {
    /// Maps the row into the domain type; the stored rate is authoritative
    fn into_room(self) -> Result<Room, DatabaseError> {
        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(Room {
            id: RoomId::from_uuid(self.id),
            room_number: self.room_number,
            room_type,
            monthly_rate: Money::from_minor(self.monthly_rate_minor, Currency::INR),
            occupied: self.occupied,
            created_at: self.created_at,
        })
    }
}
