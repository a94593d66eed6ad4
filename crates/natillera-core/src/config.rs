use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Fallback when the remote configuration omits the minimum contribution.
pub const DEFAULT_MINIMUM_CONTRIBUTION: Decimal = dec!(30_000);

/// Fallback daily late-fee rate, in pesos per day of lateness.
pub const DEFAULT_DAILY_PENALTY_RATE: Decimal = dec!(3_000);

/// Association-wide default collection days (day-of-month list).
pub const DEFAULT_COLLECTION_DAYS: &str = "15,30";

/// Global association settings as served by the registry backend.
///
/// Every field has a default so a partial (or empty) configuration document
/// still deserialises. Callers pass the values they need as explicit
/// parameters; nothing in the core reads this struct implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationConfig {
    #[serde(default = "default_minimum_contribution")]
    pub minimum_contribution: Money,

    #[serde(default = "default_daily_penalty_rate")]
    pub daily_penalty_rate: Money,

    #[serde(default = "default_collection_days")]
    pub collection_days: String,
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self {
            minimum_contribution: DEFAULT_MINIMUM_CONTRIBUTION,
            daily_penalty_rate: DEFAULT_DAILY_PENALTY_RATE,
            collection_days: DEFAULT_COLLECTION_DAYS.to_string(),
        }
    }
}

fn default_minimum_contribution() -> Money {
    DEFAULT_MINIMUM_CONTRIBUTION
}

fn default_daily_penalty_rate() -> Money {
    DEFAULT_DAILY_PENALTY_RATE
}

fn default_collection_days() -> String {
    DEFAULT_COLLECTION_DAYS.to_string()
}
