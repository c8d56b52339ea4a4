use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::{Litres, Money};

/// A tank capacity and monthly spend that are both strictly positive.
///
/// Only [`validate`] constructs this, so downstream phases never re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    pub tank_capacity_litres: Litres,
    pub monthly_cost: Money,
}

/// Parse user-entered text into a quantity.
///
/// Accepts plain decimals ("50", " 300.5 ") and scientific notation ("1e3").
/// Empty or non-numeric text yields `None`; sign is checked later by
/// [`validate`].
pub fn parse_quantity(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Convert a floating-point quantity, rejecting NaN, infinities and values
/// outside Decimal's range.
pub fn quantity_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::try_from(value).ok()
}

/// Admit the pair only when both values are present and strictly positive.
///
/// There is no upper bound. Missing, zero and negative values are all the
/// same outcome to the caller.
pub fn validate(
    tank_capacity_litres: Option<Decimal>,
    monthly_cost: Option<Decimal>,
) -> Option<ValidatedInput> {
    let tank_capacity_litres = tank_capacity_litres.filter(|v| *v > Decimal::ZERO)?;
    let monthly_cost = monthly_cost.filter(|v| *v > Decimal::ZERO)?;
    Some(ValidatedInput {
        tank_capacity_litres,
        monthly_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_padded() {
        assert_eq!(parse_quantity("50"), Some(dec!(50)));
        assert_eq!(parse_quantity("  300.5 "), Some(dec!(300.5)));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_quantity("1e3"), Some(dec!(1000)));
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_quantity("RM 300"), None);
    }

    #[test]
    fn test_parse_keeps_sign_for_validation() {
        assert_eq!(parse_quantity("-5"), Some(dec!(-5)));
    }

    #[test]
    fn test_f64_non_finite_rejected() {
        assert_eq!(quantity_from_f64(f64::NAN), None);
        assert_eq!(quantity_from_f64(f64::INFINITY), None);
        assert_eq!(quantity_from_f64(f64::NEG_INFINITY), None);
        assert_eq!(quantity_from_f64(50.0), Some(dec!(50)));
    }

    #[test]
    fn test_validate_positive_pair() {
        let input = validate(Some(dec!(50)), Some(dec!(300))).unwrap();
        assert_eq!(input.tank_capacity_litres, dec!(50));
        assert_eq!(input.monthly_cost, dec!(300));
    }

    #[test]
    fn test_validate_rejects_missing_zero_negative() {
        assert!(validate(None, Some(dec!(300))).is_none());
        assert!(validate(Some(dec!(50)), None).is_none());
        assert!(validate(Some(Decimal::ZERO), Some(dec!(300))).is_none());
        assert!(validate(Some(dec!(50)), Some(Decimal::ZERO)).is_none());
        assert!(validate(Some(dec!(-50)), Some(dec!(300))).is_none());
        assert!(validate(Some(dec!(50)), Some(dec!(-0.01))).is_none());
    }

    #[test]
    fn test_validate_has_no_upper_bound() {
        let huge = dec!(1_000_000_000_000);
        assert!(validate(Some(huge), Some(huge)).is_some());
    }
}
