//! Guest repository implementation
//!
//! Registration is the delicate operation here: the room's occupancy flip
//! and the guest insert must land in one transaction, so a rejected guest
//! never holds a room and a taken room never gains a second guest.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{GuestId, RoomId};
use domain_lodging::Guest;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for the guest registry
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: DatabasePool,
}

impl GuestRepository {
    /// Creates a new GuestRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Registers a guest into their assigned room
    ///
    /// The occupancy flip uses a guarded UPDATE (`occupied = 0` in the
    /// predicate), so two concurrent registrations for the same room cannot
    /// both succeed.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the room does not exist
    /// * `ConstraintViolation` if the room is already occupied
    /// * `DuplicateEntry` if the citizen number or email is already
    ///   registered; the occupancy flip is rolled back
    pub async fn register(&self, guest: &Guest) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let flipped = sqlx::query("UPDATE rooms SET occupied = 1 WHERE id = ? AND occupied = 0")
            .bind(*guest.room_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if flipped == 0 {
            // Distinguish a missing room from a taken one.
            let known = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms WHERE id = ?")
                .bind(*guest.room_id.as_uuid())
                .fetch_one(&mut *tx)
                .await?;

            return Err(if known == 0 {
                DatabaseError::not_found("Room", guest.room_id)
            } else {
                DatabaseError::ConstraintViolation(format!(
                    "Room '{}' is already occupied",
                    guest.room_id
                ))
            });
        }

        sqlx::query(
            r#"
            INSERT INTO guests (
                id, full_name, citizen_number, email, emergency_contact,
                address, date_of_birth, food_preference, check_in_date,
                check_out_date, last_bill_date, room_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*guest.id.as_uuid())
        .bind(&guest.full_name)
        .bind(&guest.citizen_number)
        .bind(&guest.email)
        .bind(&guest.emergency_contact)
        .bind(&guest.address)
        .bind(guest.date_of_birth)
        .bind(&guest.food_preference)
        .bind(guest.check_in_date)
        .bind(guest.check_out_date)
        .bind(guest.last_bill_date)
        .bind(*guest.room_id.as_uuid())
        .bind(guest.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        tx.commit().await?;
        Ok(())
    }

    /// Retrieves a guest by their identifier
    pub async fn get_by_id(&self, guest_id: GuestId) -> Result<Guest, DatabaseError> {
        let row = sqlx::query_as::<_, GuestRow>(
            r#"
            SELECT id, full_name, citizen_number, email, emergency_contact,
                   address, date_of_birth, food_preference, check_in_date,
                   check_out_date, last_bill_date, room_id, created_at
            FROM guests
            WHERE id = ?
            "#,
        )
        .bind(*guest_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Guest", guest_id))?;

        Ok(row.into_guest())
    }

    /// All guests, ordered by name
    pub async fn list_all(&self) -> Result<Vec<Guest>, DatabaseError> {
        let rows = sqlx::query_as::<_, GuestRow>(
            r#"
            SELECT id, full_name, citizen_number, email, emergency_contact,
                   address, date_of_birth, food_preference, check_in_date,
                   check_out_date, last_bill_date, room_id, created_at
            FROM guests
            ORDER BY full_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GuestRow::into_guest).collect())
    }

    /// Total number of registered guests
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guests")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Database row for a guest
#[derive(Debug, Clone, FromRow)]
struct GuestRow {
    id: Uuid,
    full_name: String,
    citizen_number: String,
    email: String,
    emergency_contact: String,
    address: String,
    date_of_birth: NaiveDate,
    food_preference: String,
    check_in_date: NaiveDate,
    check_out_date: Option<NaiveDate>,
    last_bill_date: Option<NaiveDate>,
    room_id: Uuid,
    created_at: DateTime<Utc>,
}

impl GuestRow {
    fn into_guest(self) -> Guest {
        Guest {
            id: GuestId::from_uuid(self.id),
            full_name: self.full_name,
            citizen_number: self.citizen_number,
            email: self.email,
            emergency_contact: self.emergency_contact,
            address: self.address,
            date_of_birth: self.date_of_birth,
            food_preference: self.food_preference,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            last_bill_date: self.last_bill_date,
            room_id: RoomId::from_uuid(self.room_id),
            created_at: self.created_at,
        }
    }
}
