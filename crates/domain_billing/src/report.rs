//! Monthly financial summary
//!
//! Aggregates one month's ledger into the totals shown on the dashboard
//! and printed at the top of the monthly report.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// Income and expense totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub total_income: Money,
    pub total_expenses: Money,
}

impl MonthlySummary {
    /// Sums payment and expense amounts; either side may be empty
    pub fn from_amounts<I, E>(income: I, expenses: E) -> Self
    where
        I: IntoIterator<Item = Money>,
        E: IntoIterator<Item = Money>,
    {
        let zero = Money::zero(Currency::INR);
        Self {
            total_income: income.into_iter().fold(zero, |acc, amount| acc + amount),
            total_expenses: expenses.into_iter().fold(zero, |acc, amount| acc + amount),
        }
    }

    /// Income minus expenses; negative when the month ran at a loss
    pub fn net_balance(&self) -> Money {
        self.total_income - self.total_expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn inr(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    #[test]
    fn test_sums_both_sides() {
        let summary = MonthlySummary::from_amounts(
            vec![inr(dec!(100)), inr(dec!(200))],
            vec![inr(dec!(50))],
        );

        assert_eq!(summary.total_income.amount(), dec!(300));
        assert_eq!(summary.total_expenses.amount(), dec!(50));
        assert_eq!(summary.net_balance().amount(), dec!(250));
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let summary = MonthlySummary::from_amounts(vec![], vec![]);

        assert!(summary.total_income.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.net_balance().is_zero());
    }

    #[test]
    fn test_net_balance_can_be_negative() {
        let summary =
            MonthlySummary::from_amounts(vec![inr(dec!(1000))], vec![inr(dec!(1500))]);

        assert_eq!(summary.net_balance().amount(), dec!(-500));
        assert!(summary.net_balance().is_negative());
    }

    #[test]
    fn test_negative_entries_reduce_totals() {
        // Corrections are recorded as negative entries, not deletions
        let summary = MonthlySummary::from_amounts(
            vec![inr(dec!(9000)), inr(dec!(-500))],
            vec![],
        );

        assert_eq!(summary.total_income.amount(), dec!(8500));
    }
}
