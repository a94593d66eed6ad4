#![cfg(feature = "loans")]

use chrono::NaiveDate;
use natillera_core::loans::{summarize_loan, LoanInput, LoanStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_loan() -> LoanInput {
    // A typical association loan: 500k at 5% flat, one month out
    LoanInput {
        principal: dec!(500_000),
        interest_rate: dec!(0.05),
        due_date: date(2024, 4, 15),
        amount_repaid: Decimal::ZERO,
        reference_date: date(2024, 3, 15),
    }
}

#[test]
fn test_active_loan_totals() {
    let out = summarize_loan(&sample_loan()).unwrap();
    let s = &out.result;

    // Interest = 500k x 0.05 = 25k; payable = 525k
    assert_eq!(s.interest, dec!(25_000));
    assert_eq!(s.total_payable, dec!(525_000));
    assert_eq!(s.balance, dec!(525_000));
    assert_eq!(s.status, LoanStatus::Active);
    assert_eq!(s.days_until_due, Some(31));
    assert_eq!(s.days_overdue, None);
}

#[test]
fn test_partial_repayment_reduces_balance() {
    let mut input = sample_loan();
    input.amount_repaid = dec!(300_000);
    let out = summarize_loan(&input).unwrap();
    assert_eq!(out.result.balance, dec!(225_000));
    assert_eq!(out.result.status, LoanStatus::Active);
}

#[test]
fn test_due_today_is_still_active() {
    let mut input = sample_loan();
    input.reference_date = input.due_date;
    let out = summarize_loan(&input).unwrap();
    assert_eq!(out.result.status, LoanStatus::Active);
    assert_eq!(out.result.days_until_due, Some(0));
}

#[test]
fn test_overdue_day_count_grows_daily() {
    let mut input = sample_loan();
    input.reference_date = date(2024, 4, 16);
    let first = summarize_loan(&input).unwrap();
    assert_eq!(first.result.status, LoanStatus::Overdue);
    assert_eq!(first.result.days_overdue, Some(1));

    input.reference_date = date(2024, 4, 17);
    let second = summarize_loan(&input).unwrap();
    assert_eq!(second.result.days_overdue, Some(2));
}

#[test]
fn test_fully_repaid_loan_is_paid_even_past_due() {
    let mut input = sample_loan();
    input.amount_repaid = dec!(525_000);
    input.reference_date = date(2024, 5, 1);
    let out = summarize_loan(&input).unwrap();
    assert_eq!(out.result.status, LoanStatus::Paid);
    assert_eq!(out.result.days_overdue, None);
}

#[test]
fn test_zero_rate_loan_has_no_interest() {
    let mut input = sample_loan();
    input.interest_rate = Decimal::ZERO;
    let out = summarize_loan(&input).unwrap();
    assert_eq!(out.result.interest, Decimal::ZERO);
    assert_eq!(out.result.total_payable, dec!(500_000));
}

#[test]
fn test_nonpositive_principal_is_rejected() {
    let mut input = sample_loan();
    input.principal = Decimal::ZERO;
    assert!(summarize_loan(&input).is_err());
}
