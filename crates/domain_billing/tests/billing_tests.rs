//! Comprehensive tests for domain_billing

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, GuestId, Money, MonthRef, RoomId};

use domain_billing::bill::Bill;
use domain_billing::calculator::{compute_bill, compute_bill_for_period};
use domain_billing::ledger::{
    parse_amount, Expense, Payment, PaymentStatus, RECOGNIZED_CATEGORIES,
};
use domain_billing::report::MonthlySummary;
use domain_billing::BillingError;

fn inr(amount: Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

fn no_discount() -> Money {
    Money::zero(Currency::INR)
}

// ============================================================================
// Calculator Tests
// ============================================================================

mod calculator_tests {
    use super::*;

    #[test]
    fn test_one_month_at_quad_rate() {
        // A guest last billed exactly 30 days ago at the 9000 rate owes
        // exactly one month
        let amount = compute_bill(inr(dec!(9000)), 30, no_discount());
        assert_eq!(amount.amount(), dec!(9000.00));
    }

    #[test]
    fn test_one_month_at_each_rate() {
        for (rate, expected) in [
            (dec!(12000), dec!(12000.00)),
            (dec!(10000), dec!(10000.00)),
            (dec!(9000), dec!(9000.00)),
        ] {
            let amount = compute_bill(inr(rate), 30, no_discount());
            assert_eq!(amount.amount(), expected);
        }
    }

    #[test]
    fn test_thirty_one_day_month_costs_more_than_rate() {
        let amount = compute_bill(inr(dec!(9000)), 31, no_discount());
        assert_eq!(amount.amount(), dec!(9300.00));
    }

    #[test]
    fn test_february_costs_less_than_rate() {
        let amount = compute_bill(inr(dec!(9000)), 28, no_discount());
        assert_eq!(amount.amount(), dec!(8400.00));
    }

    #[test]
    fn test_repeating_rate_rounds_half_to_even() {
        // 10000/30 repeats; the rounding happens once, at the end
        let amount = compute_bill(inr(dec!(10000)), 1, no_discount());
        assert_eq!(amount.amount(), dec!(333.33));
    }

    #[test]
    fn test_discount_reduces_amount() {
        let amount = compute_bill(inr(dec!(12000)), 30, inr(dec!(2000)));
        assert_eq!(amount.amount(), dec!(10000.00));
    }

    #[test]
    fn test_zero_days_zero_amount() {
        let amount = compute_bill(inr(dec!(12000)), 0, no_discount());
        assert!(amount.is_zero());
    }

    #[test]
    fn test_negative_days_not_rejected() {
        let amount = compute_bill(inr(dec!(9000)), -30, no_discount());
        assert_eq!(amount.amount(), dec!(-9000.00));
    }

    #[test]
    fn test_period_wrapper_derives_day_count() {
        let computation = compute_bill_for_period(
            inr(dec!(10000)),
            NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
            no_discount(),
        );

        assert_eq!(computation.total_days, 30);
        assert_eq!(computation.total_amount.amount(), dec!(10000.00));
    }

    #[test]
    fn test_period_wrapper_reversed_dates_go_negative() {
        let computation = compute_bill_for_period(
            inr(dec!(9000)),
            NaiveDate::from_ymd_opt(2025, 8, 27).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            no_discount(),
        );

        assert_eq!(computation.total_days, -7);
        assert!(computation.total_amount.is_negative());
    }
}

// ============================================================================
// Ledger Tests
// ============================================================================

mod ledger_tests {
    use super::*;

    #[test]
    fn test_payment_statuses_parse() {
        assert_eq!(
            "pending".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Pending
        );
        assert_eq!("paid".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!(
            "advance".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Advance
        );
    }

    #[test]
    fn test_unknown_payment_status_fails() {
        for bad in ["Paid", "PENDING", "overdue", ""] {
            assert!(
                bad.parse::<PaymentStatus>().is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_amount_parsing_enforces_numbers_only() {
        assert!(parse_amount("4500").is_ok());
        assert!(parse_amount("4500.75").is_ok());
        assert!(parse_amount("-100").is_ok());

        assert!(matches!(
            parse_amount("forty five"),
            Err(BillingError::InvalidAmount(_))
        ));
        assert!(parse_amount("45,00").is_err());
    }

    #[test]
    fn test_recognized_categories_cover_the_forms() {
        for category in ["food", "electricity", "salary", "essentials"] {
            assert!(RECOGNIZED_CATEGORIES.contains(&category));
        }
        assert_eq!(RECOGNIZED_CATEGORIES.len(), 9);
    }

    #[test]
    fn test_unlisted_category_is_still_usable() {
        // The category list is advisory; writes accept anything
        let expense = Expense::new("plumbing repair", inr(dec!(780)));
        assert_eq!(expense.category, "plumbing repair");
    }

    #[test]
    fn test_payment_defaults_to_untied() {
        let payment = Payment::new(GuestId::new(), inr(dec!(9000)), PaymentStatus::Pending);
        assert!(payment.bill_id.is_none());
    }
}

// ============================================================================
// Monthly Summary Tests
// ============================================================================

mod summary_tests {
    use super::*;

    #[test]
    fn test_totals_and_net() {
        let summary = MonthlySummary::from_amounts(
            vec![inr(dec!(100)), inr(dec!(200))],
            vec![inr(dec!(50))],
        );

        assert_eq!(summary.total_income.amount(), dec!(300));
        assert_eq!(summary.total_expenses.amount(), dec!(50));
        assert_eq!(summary.net_balance().amount(), dec!(250));
    }

    #[test]
    fn test_empty_ledger_month() {
        let summary = MonthlySummary::from_amounts(Vec::new(), Vec::new());
        assert!(summary.net_balance().is_zero());
    }

    #[test]
    fn test_loss_making_month() {
        let summary = MonthlySummary::from_amounts(
            vec![inr(dec!(20000))],
            vec![inr(dec!(15000)), inr(dec!(8000))],
        );

        assert_eq!(summary.net_balance().amount(), dec!(-3000));
    }
}

// ============================================================================
// Bill Record Tests
// ============================================================================

mod bill_tests {
    use super::*;

    #[test]
    fn test_bill_captures_computation_inputs() {
        let computation = compute_bill_for_period(
            inr(dec!(9000)),
            NaiveDate::from_ymd_opt(2025, 7, 27).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 26).unwrap(),
            inr(dec!(500)),
        );

        let bill = Bill::new(
            GuestId::new_v7(),
            RoomId::new_v7(),
            MonthRef::new(2025, 8).unwrap(),
            computation.total_days,
            inr(dec!(500)),
            computation.total_amount,
            "bills/bills for August 2025/bill_ravi_20250827_101500.pdf",
        );

        assert_eq!(bill.total_days, 30);
        assert_eq!(bill.discount.amount(), dec!(500));
        assert_eq!(bill.total_amount.amount(), dec!(8500.00));
        assert_eq!(bill.billing_month.label(), "August 2025");
    }

    #[test]
    fn test_bill_ids_are_unique() {
        let month = MonthRef::new(2025, 8).unwrap();
        let a = Bill::new(
            GuestId::new(),
            RoomId::new(),
            month,
            30,
            no_discount(),
            inr(dec!(9000)),
            "a.pdf",
        );
        let b = Bill::new(
            GuestId::new(),
            RoomId::new(),
            month,
            30,
            no_discount(),
            inr(dec!(9000)),
            "b.pdf",
        );

        assert_ne!(a.id, b.id);
    }
}
