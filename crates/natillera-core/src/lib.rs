pub mod config;
pub mod error;
pub mod mora;
pub mod schedule;
pub mod types;

#[cfg(feature = "contributions")]
pub mod contributions;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "settlement")]
pub mod settlement;

pub use error::NatilleraError;
pub use types::*;

/// Standard result type for all natillera operations
pub type NatilleraResult<T> = Result<T, NatilleraError>;
