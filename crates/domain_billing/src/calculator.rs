//! Bill calculation
//!
//! The hostel bills by the day against a monthly room rate. The daily rate
//! is the monthly rate over a fixed 30-day divisor regardless of the
//! calendar month being billed, so a 31-day month costs slightly more than
//! one month's rate and February costs less.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{days_between, Money};

/// Fixed divisor converting a monthly rate into a daily rate
pub const MONTH_DIVISOR: i64 = 30;

/// Computes the amount due for a stay of `total_days` days
///
/// `total_days x (monthly_rate / 30) - discount`, rounded to two decimal
/// places half-to-even. Day counts are not validated: zero days yields
/// zero (minus any discount), and a negative count flows straight through
/// the arithmetic.
pub fn compute_bill(monthly_rate: Money, total_days: i64, discount: Money) -> Money {
    let gross =
        monthly_rate.amount() * Decimal::from(total_days) / Decimal::from(MONTH_DIVISOR);
    Money::new(gross - discount.amount(), monthly_rate.currency()).round_bankers(2)
}

/// Day count and amount for one billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillComputation {
    pub total_days: i64,
    pub total_amount: Money,
}

/// Computes the bill for the span from `period_start` to `period_end`
///
/// The day count is the raw calendar difference; callers pass the dates
/// in order.
pub fn compute_bill_for_period(
    monthly_rate: Money,
    period_start: NaiveDate,
    period_end: NaiveDate,
    discount: Money,
) -> BillComputation {
    let total_days = days_between(period_start, period_end);
    BillComputation {
        total_days,
        total_amount: compute_bill(monthly_rate, total_days, discount),
    }
}
