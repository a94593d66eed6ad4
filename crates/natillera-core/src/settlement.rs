use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::{NatilleraError, NatilleraResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Sum of every contribution the member made during the cycle.
    pub total_contributed: Money,
    /// The member's share of cycle earnings. May be negative when the cycle
    /// closes at a loss.
    #[serde(default)]
    pub earnings: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    pub concept: String,
    pub value: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementStatement {
    pub total_contributed: Money,
    pub earnings: Money,
    pub total_payable: Money,
    /// Receipt rows in presentation order, for whatever medium the caller
    /// renders them in.
    pub line_items: Vec<SettlementLine>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Liquidation statement for a member leaving the cycle: contributions plus
/// earnings, itemised for the receipt.
pub fn settle_member(
    input: &SettlementInput,
) -> NatilleraResult<ComputationOutput<SettlementStatement>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.total_contributed < Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "total_contributed".into(),
            reason: "Contributed total must not be negative".into(),
        });
    }
    if input.earnings < Decimal::ZERO {
        warnings.push(format!(
            "Earnings are negative ({}); the cycle closed at a loss for this member.",
            input.earnings
        ));
    }

    let total_payable = input.total_contributed + input.earnings;

    let line_items = vec![
        SettlementLine {
            concept: "Total contributed".into(),
            value: input.total_contributed,
        },
        SettlementLine {
            concept: "Accumulated earnings".into(),
            value: input.earnings,
        },
        SettlementLine {
            concept: "Total payable".into(),
            value: total_payable,
        },
    ];

    let statement = SettlementStatement {
        total_contributed: input.total_contributed,
        earnings: input.earnings,
        total_payable,
        line_items,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "line_item_count": 3,
    });

    Ok(with_metadata(
        "Member Liquidation Statement",
        &assumptions,
        warnings,
        elapsed,
        statement,
    ))
}
