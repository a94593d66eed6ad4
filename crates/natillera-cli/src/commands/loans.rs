use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use natillera_core::loans::{summarize_loan, LoanInput};

use crate::input;

/// Arguments for loan summarisation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in pesos
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Flat rate for the loan term, as a decimal (0.05 = 5%)
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Loan due date, YYYY-MM-DD
    #[arg(long)]
    pub due_date: Option<NaiveDate>,

    /// Total repaid so far
    #[arg(long)]
    pub amount_repaid: Option<Decimal>,

    /// Date to evaluate the loan at, YYYY-MM-DD
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args.principal
                .ok_or("--principal is required (or provide --input)")?,
            interest_rate: args.interest_rate
                .ok_or("--interest-rate is required (or provide --input)")?,
            due_date: args.due_date
                .ok_or("--due-date is required (or provide --input)")?,
            amount_repaid: args.amount_repaid.unwrap_or(Decimal::ZERO),
            reference_date: args.reference_date
                .ok_or("--reference-date is required (or provide --input)")?,
        }
    };

    let result = summarize_loan(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}
