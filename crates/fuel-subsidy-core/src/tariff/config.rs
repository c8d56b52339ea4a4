use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FuelSubsidyError;
use crate::types::{Litres, Price};
use crate::FuelSubsidyResult;

/// Prices and the monthly litre limit that define both subsidy schemes.
///
/// Defaults are the RON95 figures: RM 2.05/L unlimited today, RM 1.99/L for
/// the first 300 L per month under the targeted scheme, RM 2.60/L beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TariffConfig {
    /// Price per litre under the existing unlimited flat subsidy
    pub current_flat_price: Price,
    /// Price per litre within the monthly limit under the tiered scheme
    pub new_subsidized_price: Price,
    /// Monthly litres billed at the subsidized price (inclusive)
    pub subsidy_limit_litres: Litres,
    /// Price per litre beyond the monthly limit under the tiered scheme
    pub above_limit_price: Price,
    /// Unsubsidized reference price per litre
    pub market_price: Price,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            current_flat_price: dec!(2.05),
            new_subsidized_price: dec!(1.99),
            subsidy_limit_litres: dec!(300),
            above_limit_price: dec!(2.60),
            market_price: dec!(2.60),
        }
    }
}

impl TariffConfig {
    /// Check positivity of every field and the price ordering
    /// `new_subsidized_price < current_flat_price <= market_price`.
    ///
    /// `above_limit_price` is not compared against the flat price.
    pub fn validate(&self) -> FuelSubsidyResult<()> {
        let fields = [
            ("current_flat_price", self.current_flat_price),
            ("new_subsidized_price", self.new_subsidized_price),
            ("subsidy_limit_litres", self.subsidy_limit_litres),
            ("above_limit_price", self.above_limit_price),
            ("market_price", self.market_price),
        ];
        for (field, value) in fields {
            if value <= Decimal::ZERO {
                return Err(FuelSubsidyError::InvalidTariff {
                    field: field.into(),
                    reason: format!("Must be positive, got {value}"),
                });
            }
        }

        if self.new_subsidized_price >= self.current_flat_price {
            return Err(FuelSubsidyError::InvalidTariff {
                field: "new_subsidized_price".into(),
                reason: format!(
                    "Subsidized price ({}) must be below the current flat price ({})",
                    self.new_subsidized_price, self.current_flat_price
                ),
            });
        }
        if self.current_flat_price > self.market_price {
            return Err(FuelSubsidyError::InvalidTariff {
                field: "current_flat_price".into(),
                reason: format!(
                    "Flat price ({}) cannot exceed the market price ({})",
                    self.current_flat_price, self.market_price
                ),
            });
        }
        Ok(())
    }
}
