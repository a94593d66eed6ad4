use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::{NatilleraError, NatilleraResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Flat rate for the loan term, as a decimal (0.05 = 5%).
    pub interest_rate: Rate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub amount_repaid: Money,
    /// The date the loan is evaluated at.
    pub reference_date: NaiveDate,
}

/// Repayment state of a loan at the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    Active,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub interest: Money,
    pub total_payable: Money,
    pub balance: Money,
    pub status: LoanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<i64>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Interest, total payable, outstanding balance, and status of a loan at the
/// reference date.
///
/// Interest is the flat quote the association lends at: principal times the
/// rate, once for the term. A loan with no outstanding balance is Paid
/// regardless of dates; otherwise it is Overdue past its due date and Active
/// before it.
pub fn summarize_loan(input: &LoanInput) -> NatilleraResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.principal <= Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be positive".into(),
        });
    }
    if input.interest_rate < Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "interest_rate".into(),
            reason: "Interest rate must not be negative".into(),
        });
    }
    if input.amount_repaid < Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "amount_repaid".into(),
            reason: "Repaid amount must not be negative".into(),
        });
    }

    let interest = input.principal * input.interest_rate;
    let total_payable = input.principal + interest;

    let balance = if input.amount_repaid > total_payable {
        warnings.push(format!(
            "Repaid {} exceeds total payable {}; balance floored at zero.",
            input.amount_repaid, total_payable
        ));
        Decimal::ZERO
    } else {
        total_payable - input.amount_repaid
    };

    let days_to_due = input
        .due_date
        .signed_duration_since(input.reference_date)
        .num_days();

    let (status, days_until_due, days_overdue) = if balance.is_zero() {
        (LoanStatus::Paid, None, None)
    } else if days_to_due < 0 {
        (LoanStatus::Overdue, None, Some(-days_to_due))
    } else {
        (LoanStatus::Active, Some(days_to_due), None)
    };

    let summary = LoanSummary {
        interest,
        total_payable,
        balance,
        status,
        days_until_due,
        days_overdue,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "interest_basis": "flat_per_term",
        "interest_rate": input.interest_rate.to_string(),
    });

    Ok(with_metadata(
        "Flat-Rate Loan Summary",
        &assumptions,
        warnings,
        elapsed,
        summary,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_flat_interest_and_total() {
        let input = LoanInput {
            principal: dec!(1_000_000),
            interest_rate: dec!(0.05),
            due_date: date(2024, 6, 15),
            amount_repaid: Decimal::ZERO,
            reference_date: date(2024, 5, 15),
        };
        let out = summarize_loan(&input).unwrap();
        // 1M at 5% flat: interest 50k, payable 1.05M
        assert_eq!(out.result.interest, dec!(50_000));
        assert_eq!(out.result.total_payable, dec!(1_050_000));
        assert_eq!(out.result.status, LoanStatus::Active);
        assert_eq!(out.result.days_until_due, Some(31));
    }

    #[test]
    fn test_overdue_counts_days_past_due() {
        let input = LoanInput {
            principal: dec!(200_000),
            interest_rate: dec!(0.03),
            due_date: date(2024, 3, 1),
            amount_repaid: Decimal::ZERO,
            reference_date: date(2024, 3, 11),
        };
        let out = summarize_loan(&input).unwrap();
        assert_eq!(out.result.status, LoanStatus::Overdue);
        assert_eq!(out.result.days_overdue, Some(10));
    }

    #[test]
    fn test_paid_dominates_overdue() {
        let input = LoanInput {
            principal: dec!(200_000),
            interest_rate: dec!(0.03),
            due_date: date(2024, 3, 1),
            amount_repaid: dec!(206_000),
            reference_date: date(2024, 4, 1),
        };
        let out = summarize_loan(&input).unwrap();
        assert_eq!(out.result.status, LoanStatus::Paid);
        assert_eq!(out.result.balance, Decimal::ZERO);
    }

    #[test]
    fn test_overpayment_warns_and_floors_balance() {
        let input = LoanInput {
            principal: dec!(100_000),
            interest_rate: dec!(0.05),
            due_date: date(2024, 3, 1),
            amount_repaid: dec!(120_000),
            reference_date: date(2024, 3, 1),
        };
        let out = summarize_loan(&input).unwrap();
        assert_eq!(out.result.balance, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }
}
