use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::DEFAULT_MINIMUM_CONTRIBUTION;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::{NatilleraError, NatilleraResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionInput {
    pub amount: Money,
    /// Late fee recorded alongside the contribution, if any.
    #[serde(default)]
    pub penalty: Money,
    /// The association-wide minimum the amount is checked against.
    #[serde(default = "default_minimum")]
    pub minimum_contribution: Money,
}

fn default_minimum() -> Money {
    DEFAULT_MINIMUM_CONTRIBUTION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionReceipt {
    pub amount: Money,
    pub penalty: Money,
    pub total: Money,
    pub below_minimum: bool,
    pub minimum_applied: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Receipt arithmetic for a contribution: total received and a below-minimum
/// flag.
///
/// An amount under the association minimum is flagged and warned about but
/// still accepted — the treasurer decides whether to record it.
pub fn check_contribution(
    input: &ContributionInput,
) -> NatilleraResult<ComputationOutput<ContributionReceipt>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.amount <= Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "amount".into(),
            reason: "Contribution amount must be positive".into(),
        });
    }
    if input.penalty < Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "penalty".into(),
            reason: "Penalty must not be negative".into(),
        });
    }

    let below_minimum = input.amount < input.minimum_contribution;
    if below_minimum {
        warnings.push(format!(
            "Amount {} is below the association minimum {}.",
            input.amount, input.minimum_contribution
        ));
    }

    let receipt = ContributionReceipt {
        amount: input.amount,
        penalty: input.penalty,
        total: input.amount + input.penalty,
        below_minimum,
        minimum_applied: input.minimum_contribution,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "minimum_contribution": input.minimum_contribution.to_string(),
    });

    Ok(with_metadata(
        "Contribution Receipt Check",
        &assumptions,
        warnings,
        elapsed,
        receipt,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_includes_penalty() {
        let input = ContributionInput {
            amount: dec!(50_000),
            penalty: dec!(9_000),
            minimum_contribution: dec!(30_000),
        };
        let out = check_contribution(&input).unwrap();
        assert_eq!(out.result.total, dec!(59_000));
        assert!(!out.result.below_minimum);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_below_minimum_warns_but_succeeds() {
        let input = ContributionInput {
            amount: dec!(20_000),
            penalty: Decimal::ZERO,
            minimum_contribution: dec!(30_000),
        };
        let out = check_contribution(&input).unwrap();
        assert!(out.result.below_minimum);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.result.total, dec!(20_000));
    }

    #[test]
    fn test_nonpositive_amount_is_rejected() {
        let input = ContributionInput {
            amount: Decimal::ZERO,
            penalty: Decimal::ZERO,
            minimum_contribution: dec!(30_000),
        };
        assert!(check_contribution(&input).is_err());
    }
}
