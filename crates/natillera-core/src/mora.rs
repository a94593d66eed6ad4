use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::DEFAULT_DAILY_PENALTY_RATE;
use crate::schedule::{project_due_date, PaymentSchedule, WEEKLY_LOOKBACK_DAYS};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::{NatilleraError, NatilleraResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltySuggestionInput {
    pub schedule: PaymentSchedule,
    /// The contribution's recorded date, against which lateness is evaluated.
    pub reference_date: NaiveDate,
    /// Pesos charged per whole day of lateness.
    #[serde(default = "default_daily_rate")]
    pub daily_rate: Money,
}

fn default_daily_rate() -> Money {
    DEFAULT_DAILY_PENALTY_RATE
}

/// Outcome of comparing a reference date against a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyEstimate {
    pub amount: Money,
    pub days_late: i64,
    pub on_time: bool,
}

impl PenaltyEstimate {
    fn on_time() -> Self {
        Self {
            amount: Decimal::ZERO,
            days_late: 0,
            on_time: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltySuggestion {
    /// The due date the suggestion is measured against, when one could be
    /// projected from the member's schedule.
    pub deadline: Option<NaiveDate>,
    pub days_late: i64,
    pub suggested_amount: Money,
    pub on_time: bool,
    pub daily_rate: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Penalty for paying on `reference` against `deadline`, at `daily_rate`
/// pesos per day late.
///
/// No deadline, or a reference on or before it, means no penalty. Dates carry
/// no time of day, so the day difference is already whole days; paying any
/// time during a late day counts as that full day.
pub fn estimate_penalty(
    deadline: Option<NaiveDate>,
    reference: NaiveDate,
    daily_rate: Money,
) -> PenaltyEstimate {
    let Some(deadline) = deadline else {
        return PenaltyEstimate::on_time();
    };

    if reference <= deadline {
        return PenaltyEstimate::on_time();
    }

    let days_late = reference.signed_duration_since(deadline).num_days();
    PenaltyEstimate {
        amount: Decimal::from(days_late) * daily_rate,
        days_late,
        on_time: false,
    }
}

/// Project the member's most recent due date and suggest a late fee for the
/// given contribution date.
///
/// The suggestion is advisory: the treasurer can always override the amount
/// before recording. A schedule that projects no deadline produces a zero
/// suggestion with a warning, not an error.
pub fn suggest_penalty(
    input: &PenaltySuggestionInput,
) -> NatilleraResult<ComputationOutput<PenaltySuggestion>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.daily_rate < Decimal::ZERO {
        return Err(NatilleraError::InvalidInput {
            field: "daily_rate".into(),
            reason: "Daily penalty rate must not be negative".into(),
        });
    }

    let deadline = project_due_date(&input.schedule, input.reference_date);
    if deadline.is_none() {
        warnings.push(format!(
            "No due date could be projected from frequency '{}' with spec '{}'; \
             suggesting zero — enter the penalty manually if one applies.",
            input.schedule.frequency, input.schedule.schedule_spec
        ));
    }

    let estimate = estimate_penalty(deadline, input.reference_date, input.daily_rate);

    let output = PenaltySuggestion {
        deadline,
        days_late: estimate.days_late,
        suggested_amount: estimate.amount,
        on_time: estimate.on_time,
        daily_rate: input.daily_rate,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "frequency": input.schedule.frequency,
        "schedule_spec": input.schedule.schedule_spec,
        "weekly_lookback_days": WEEKLY_LOOKBACK_DAYS,
    });

    Ok(with_metadata(
        "Due-Date Projection and Daily Late-Fee Suggestion",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}
