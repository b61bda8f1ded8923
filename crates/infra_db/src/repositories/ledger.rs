//! Ledger repository implementation
//!
//! Payments and expenses are append-only rows; there is no update or
//! delete path. Month-scoped queries use half-open recorded-at bounds
//! computed in Rust (see `MonthRef::bounds`).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{BillId, Currency, ExpenseId, GuestId, Money, MonthRef, PaymentId};
use domain_billing::{Expense, Payment, PaymentStatus};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for the payment and expense ledger
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: DatabasePool,
}

/// A payment joined with the paying guest's name, for display lists
#[derive(Debug, Clone)]
pub struct PaymentWithGuest {
    pub payment: Payment,
    pub guest_name: String,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Appends a payment to the ledger
    ///
    /// # Errors
    ///
    /// Returns `ForeignKeyViolation` if the guest (or linked bill) does
    /// not exist
    pub async fn record_payment(&self, payment: &Payment) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO payments (id, guest_id, bill_id, amount_minor, status, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*payment.id.as_uuid())
        .bind(*payment.guest_id.as_uuid())
        .bind(payment.bill_id.map(|id| *id.as_uuid()))
        .bind(payment.amount.to_minor())
        .bind(payment.status.as_str())
        .bind(payment.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// Appends an expense to the ledger
    pub async fn record_expense(&self, expense: &Expense) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, category, description, amount_minor, recorded_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(*expense.id.as_uuid())
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.amount.to_minor())
        .bind(expense.recorded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// All payments with their guests' names, newest first
    pub async fn list_payments(&self) -> Result<Vec<PaymentWithGuest>, DatabaseError> {
        let rows = sqlx::query_as::<_, PaymentWithGuestRow>(
            r#"
            SELECT p.id, p.guest_id, p.bill_id, p.amount_minor, p.status, p.recorded_at,
                   g.full_name AS guest_name
            FROM payments p
            INNER JOIN guests g ON g.id = p.guest_id
            ORDER BY p.recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(PaymentWithGuestRow::into_payment_with_guest)
            .collect()
    }

    /// All expenses, newest first
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, DatabaseError> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, category, description, amount_minor, recorded_at
            FROM expenses
            ORDER BY recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
    }

    /// Payments recorded in the given month, in chronological order
    pub async fn payments_for_month(
        &self,
        month: MonthRef,
    ) -> Result<Vec<PaymentWithGuest>, DatabaseError> {
        let (start, end) = month.bounds();

        let rows = sqlx::query_as::<_, PaymentWithGuestRow>(
            r#"
            SELECT p.id, p.guest_id, p.bill_id, p.amount_minor, p.status, p.recorded_at,
                   g.full_name AS guest_name
            FROM payments p
            INNER JOIN guests g ON g.id = p.guest_id
            WHERE p.recorded_at >= ? AND p.recorded_at < ?
            ORDER BY p.recorded_at
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(PaymentWithGuestRow::into_payment_with_guest)
            .collect()
    }

    /// Expenses recorded in the given month, in chronological order
    pub async fn expenses_for_month(&self, month: MonthRef) -> Result<Vec<Expense>, DatabaseError> {
        let (start, end) = month.bounds();

        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, category, description, amount_minor, recorded_at
            FROM expenses
            WHERE recorded_at >= ? AND recorded_at < ?
            ORDER BY recorded_at
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
    }
}

/// Database row for a payment joined with the guest's name
#[derive(Debug, Clone, FromRow)]
struct PaymentWithGuestRow {
    id: Uuid,
    guest_id: Uuid,
    bill_id: Option<Uuid>,
    amount_minor: i64,
    status: String,
    recorded_at: DateTime<Utc>,
    guest_name: String,
}

impl PaymentWithGuestRow {
    fn into_payment_with_guest(self) -> Result<PaymentWithGuest, DatabaseError> {
        let status = self
            .status
            .parse::<PaymentStatus>()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(PaymentWithGuest {
            payment: Payment {
                id: PaymentId::from_uuid(self.id),
                guest_id: GuestId::from_uuid(self.guest_id),
                bill_id: self.bill_id.map(BillId::from_uuid),
                amount: Money::from_minor(self.amount_minor, Currency::INR),
                status,
                recorded_at: self.recorded_at,
            },
            guest_name: self.guest_name,
        })
    }
}

/// Database row for an expense
#[derive(Debug, Clone, FromRow)]
struct ExpenseRow {
    id: Uuid,
    category: String,
    description: Option<String>,
    amount_minor: i64,
    recorded_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> Expense {
        Expense {
            id: ExpenseId::from_uuid(self.id),
            category: self.category,
            description: self.description,
            amount: Money::from_minor(self.amount_minor, Currency::INR),
            recorded_at: self.recorded_at,
        }
    }
}
