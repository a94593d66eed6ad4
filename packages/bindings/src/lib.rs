use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Mora
// ---------------------------------------------------------------------------

#[napi]
pub fn suggest_penalty(input_json: String) -> NapiResult<String> {
    let input: natillera_core::mora::PenaltySuggestionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = natillera_core::mora::suggest_penalty(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct ProjectionInput {
    schedule: natillera_core::schedule::PaymentSchedule,
    reference_date: NaiveDate,
}

#[napi]
pub fn project_due_date(input_json: String) -> NapiResult<String> {
    let input: ProjectionInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let deadline = natillera_core::schedule::project_due_date(&input.schedule, input.reference_date);
    serde_json::to_string(&serde_json::json!({
        "deadline": deadline,
        "found": deadline.is_some(),
    }))
    .map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Contributions
// ---------------------------------------------------------------------------

#[napi]
pub fn check_contribution(input_json: String) -> NapiResult<String> {
    let input: natillera_core::contributions::ContributionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        natillera_core::contributions::check_contribution(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn summarize_loan(input_json: String) -> NapiResult<String> {
    let input: natillera_core::loans::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = natillera_core::loans::summarize_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

#[napi]
pub fn settle_member(input_json: String) -> NapiResult<String> {
    let input: natillera_core::settlement::SettlementInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = natillera_core::settlement::settle_member(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
