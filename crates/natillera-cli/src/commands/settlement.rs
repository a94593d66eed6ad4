use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use natillera_core::settlement::{settle_member, SettlementInput};

use crate::input;

/// Arguments for member liquidation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SettlementArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Sum of the member's contributions for the cycle
    #[arg(long)]
    pub total_contributed: Option<Decimal>,

    /// The member's earnings share (may be negative)
    #[arg(long)]
    pub earnings: Option<Decimal>,
}

pub fn run_settlement(args: SettlementArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let settlement_input: SettlementInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SettlementInput {
            total_contributed: args.total_contributed
                .ok_or("--total-contributed is required (or provide --input)")?,
            earnings: args.earnings.unwrap_or(Decimal::ZERO),
        }
    };

    let result = settle_member(&settlement_input)?;
    Ok(serde_json::to_value(result)?)
}
