use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use natillera_core::config::DEFAULT_MINIMUM_CONTRIBUTION;
use natillera_core::contributions::{check_contribution, ContributionInput};

use crate::input;

/// Arguments for contribution receipt checking
#[derive(Args)]
pub struct ContributionArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Contribution amount in pesos
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Late fee recorded with the contribution
    #[arg(long)]
    pub penalty: Option<Decimal>,

    /// Association minimum to check against (defaults to the global minimum)
    #[arg(long)]
    pub minimum: Option<Decimal>,
}

pub fn run_contribution(args: ContributionArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let contribution_input: ContributionInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ContributionInput {
            amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            penalty: args.penalty.unwrap_or(Decimal::ZERO),
            minimum_contribution: args.minimum.unwrap_or(DEFAULT_MINIMUM_CONTRIBUTION),
        }
    };

    let result = check_contribution(&contribution_input)?;
    Ok(serde_json::to_value(result)?)
}
