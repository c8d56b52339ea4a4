pub mod engine;
pub mod error;
pub mod tariff;
pub mod types;

pub use engine::calculator::{calculate, calculate_str, CalculationResult, FuelCalculator};
pub use error::FuelSubsidyError;
pub use tariff::TariffConfig;
pub use types::*;

/// Standard result type for all fuel-subsidy operations
pub type FuelSubsidyResult<T> = Result<T, FuelSubsidyError>;
