use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use natillera_core::config::DEFAULT_DAILY_PENALTY_RATE;
use natillera_core::mora::{suggest_penalty, PenaltySuggestionInput};
use natillera_core::schedule::{project_due_date, PaymentSchedule};

use crate::input;

/// Arguments for late-fee suggestion
#[derive(Args)]
pub struct MoraArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Payment frequency: MONTHLY, BIWEEKLY or WEEKLY (Spanish forms accepted)
    #[arg(long)]
    pub frequency: Option<String>,

    /// Day(s) of month, or a weekday index (0=Sun..6=Sat) for weekly
    #[arg(long)]
    pub schedule_spec: Option<String>,

    /// Contribution date, YYYY-MM-DD
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    /// Pesos charged per day late (defaults to the association rate)
    #[arg(long)]
    pub daily_rate: Option<Decimal>,
}

/// Arguments for due-date projection
#[derive(Args)]
pub struct DeadlineArgs {
    /// Payment frequency: MONTHLY, BIWEEKLY or WEEKLY (Spanish forms accepted)
    #[arg(long)]
    pub frequency: String,

    /// Day(s) of month, or a weekday index (0=Sun..6=Sat) for weekly
    #[arg(long)]
    pub schedule_spec: String,

    /// Date to project against, YYYY-MM-DD
    #[arg(long)]
    pub reference_date: NaiveDate,
}

pub fn run_mora(args: MoraArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let suggestion_input: PenaltySuggestionInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PenaltySuggestionInput {
            schedule: PaymentSchedule::new(
                args.frequency
                    .ok_or("--frequency is required (or provide --input)")?,
                args.schedule_spec
                    .ok_or("--schedule-spec is required (or provide --input)")?,
            ),
            reference_date: args.reference_date
                .ok_or("--reference-date is required (or provide --input)")?,
            daily_rate: args.daily_rate.unwrap_or(DEFAULT_DAILY_PENALTY_RATE),
        }
    };

    let result = suggest_penalty(&suggestion_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_deadline(args: DeadlineArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule = PaymentSchedule::new(args.frequency, args.schedule_spec);
    let deadline = project_due_date(&schedule, args.reference_date);

    Ok(serde_json::json!({
        "deadline": deadline,
        "found": deadline.is_some(),
    }))
}
