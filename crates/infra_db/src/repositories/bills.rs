//! Bill repository implementation
//!
//! Creating a bill also advances the guest's billing anchor; the two
//! writes share a transaction so a failed insert never moves the anchor
//! and a moved anchor always has its bill.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{BillId, Currency, GuestId, Money, MonthRef, RoomId};
use domain_billing::Bill;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for generated bills
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: DatabasePool,
}

/// A bill joined with the billed guest's name, for display lists
#[derive(Debug, Clone)]
pub struct BillWithGuest {
    pub bill: Bill,
    pub guest_name: String,
}

impl BillRepository {
    /// Creates a new BillRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts the bill and advances the guest's last bill date to
    /// `period_end`, in one transaction
    ///
    /// # Errors
    ///
    /// * `NotFound` if the billed guest no longer exists; the bill insert
    ///   is rolled back
    /// * `ForeignKeyViolation` if the referenced room is gone
    pub async fn create(&self, bill: &Bill, period_end: NaiveDate) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO bills (
                id, guest_id, room_id, billing_year, billing_month,
                total_days, discount_minor, total_amount_minor,
                generated_at, document_path
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*bill.id.as_uuid())
        .bind(*bill.guest_id.as_uuid())
        .bind(*bill.room_id.as_uuid())
        .bind(bill.billing_month.year())
        .bind(bill.billing_month.month())
        .bind(bill.total_days)
        .bind(bill.discount.to_minor())
        .bind(bill.total_amount.to_minor())
        .bind(bill.generated_at)
        .bind(&bill.document_path)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let updated = sqlx::query("UPDATE guests SET last_bill_date = ? WHERE id = ?")
            .bind(period_end)
            .bind(*bill.guest_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(DatabaseError::not_found("Guest", bill.guest_id));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Bills raised for one guest, newest first
    pub async fn list_by_guest(&self, guest_id: GuestId) -> Result<Vec<Bill>, DatabaseError> {
        let rows = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT id, guest_id, room_id, billing_year, billing_month,
                   total_days, discount_minor, total_amount_minor,
                   generated_at, document_path
            FROM bills
            WHERE guest_id = ?
            ORDER BY generated_at DESC
            "#,
        )
        .bind(*guest_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BillRow::into_bill).collect()
    }

    /// The most recently generated bills with their guests' names
    pub async fn list_recent_with_guests(
        &self,
        limit: i64,
    ) -> Result<Vec<BillWithGuest>, DatabaseError> {
        let rows = sqlx::query_as::<_, BillWithGuestRow>(
            r#"
            SELECT b.id, b.guest_id, b.room_id, b.billing_year, b.billing_month,
                   b.total_days, b.discount_minor, b.total_amount_minor,
                   b.generated_at, b.document_path,
                   g.full_name AS guest_name
            FROM bills b
            INNER JOIN guests g ON g.id = b.guest_id
            ORDER BY b.generated_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(BillWithGuestRow::into_bill_with_guest)
            .collect()
    }
}

/// Database row for a bill
#[derive(Debug, Clone, FromRow)]
struct BillRow {
    id: Uuid,
    guest_id: Uuid,
    room_id: Uuid,
    billing_year: i32,
    billing_month: u32,
    total_days: i64,
    discount_minor: i64,
    total_amount_minor: i64,
    generated_at: DateTime<Utc>,
    document_path: String,
}

impl BillRow {
    fn into_bill(self) -> Result<Bill, DatabaseError> {
        let billing_month = MonthRef::new(self.billing_year, self.billing_month)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(Bill {
            id: BillId::from_uuid(self.id),
            guest_id: GuestId::from_uuid(self.guest_id),
            room_id: RoomId::from_uuid(self.room_id),
            billing_month,
            total_days: self.total_days,
            discount: Money::from_minor(self.discount_minor, Currency::INR),
            total_amount: Money::from_minor(self.total_amount_minor, Currency::INR),
            generated_at: self.generated_at,
            document_path: self.document_path,
        })
    }
}

/// Database row for a bill joined with the guest's name
#[derive(Debug, Clone, FromRow)]
struct BillWithGuestRow {
    id: Uuid,
    guest_id: Uuid,
    room_id: Uuid,
    billing_year: i32,
    billing_month: u32,
    total_days: i64,
    discount_minor: i64,
    total_amount_minor: i64,
    generated_at: DateTime<Utc>,
    document_path: String,
    guest_name: String,
}

impl BillWithGuestRow {
    fn into_bill_with_guest(self) -> Result<BillWithGuest, DatabaseError> {
        let billing_month = MonthRef::new(self.billing_year, self.billing_month)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(BillWithGuest {
            bill: Bill {
                id: BillId::from_uuid(self.id),
                guest_id: GuestId::from_uuid(self.guest_id),
                room_id: RoomId::from_uuid(self.room_id),
                billing_month,
                total_days: self.total_days,
                discount: Money::from_minor(self.discount_minor, Currency::INR),
                total_amount: Money::from_minor(self.total_amount_minor, Currency::INR),
                generated_at: self.generated_at,
                document_path: self.document_path,
            },
            guest_name: self.guest_name,
        })
    }
}
