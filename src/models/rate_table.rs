//! Base rate and category multipliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayCategory;

/// Default base hourly rate, in COP.
pub const DEFAULT_BASE_RATE: Decimal = Decimal::from_parts(618_913, 0, 0, false, 2);

/// A validated base hourly rate together with the fixed category multipliers.
///
/// Only the base rate is configurable; multipliers come from
/// [`PayCategory::multiplier`].
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{PayCategory, RateTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable::new(Decimal::from_str("10000").unwrap()).unwrap();
/// assert_eq!(rates.rate_for(PayCategory::Hendf).unwrap(), Decimal::from_str("25000").unwrap());
///
/// assert!(RateTable::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct RateTable {
    base_rate: Decimal,
}

impl RateTable {
    /// Creates a rate table, rejecting a zero or negative base rate.
    pub fn new(base_rate: Decimal) -> EngineResult<Self> {
        if base_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate { rate: base_rate });
        }
        Ok(Self { base_rate })
    }

    /// The base hourly rate.
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// The multiplier for a category.
    pub fn multiplier(&self, category: PayCategory) -> Decimal {
        category.multiplier()
    }

    /// The effective hourly rate for a category (base rate times multiplier).
    ///
    /// Fails with [`EngineError::CalculationError`] when the product does not
    /// fit in a `Decimal`.
    pub fn rate_for(&self, category: PayCategory) -> EngineResult<Decimal> {
        self.base_rate
            .checked_mul(category.multiplier())
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "rate for {} overflows at base rate {}",
                    category, self.base_rate
                ),
            })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
        }
    }
}

impl TryFrom<Decimal> for RateTable {
    type Error = EngineError;

    fn try_from(base_rate: Decimal) -> EngineResult<Self> {
        Self::new(base_rate)
    }
}

impl From<RateTable> for Decimal {
    fn from(rates: RateTable) -> Self {
        rates.base_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_base_rate() {
        assert_eq!(DEFAULT_BASE_RATE, dec("6189.13"));
        assert_eq!(RateTable::default().base_rate(), dec("6189.13"));
    }

    #[test]
    fn test_rejects_zero_and_negative_rates() {
        for rate in ["0", "0.00", "-1", "-6189.13"] {
            match RateTable::new(dec(rate)) {
                Err(EngineError::InvalidRate { rate: r }) => assert_eq!(r, dec(rate)),
                other => panic!("Expected InvalidRate for {rate}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_small_positive_rate() {
        assert!(RateTable::new(dec("0.01")).is_ok());
    }

    #[test]
    fn test_rate_for_applies_multiplier() {
        let rates = RateTable::new(dec("6189.13")).unwrap();
        assert_eq!(rates.rate_for(PayCategory::Rdo).unwrap(), dec("6189.13"));
        assert_eq!(rates.rate_for(PayCategory::Rno).unwrap(), dec("8355.3255"));
        assert_eq!(rates.rate_for(PayCategory::Heddf).unwrap(), dec("12378.26"));
        assert_eq!(rates.multiplier(PayCategory::Rndf), dec("2.10"));
    }

    #[test]
    fn test_rate_for_reports_overflow() {
        let rates = RateTable::new(Decimal::MAX).unwrap();
        assert!(rates.rate_for(PayCategory::Rdo).is_ok());
        match rates.rate_for(PayCategory::Hendf) {
            Err(EngineError::CalculationError { message }) => assert!(message.contains("HENDF")),
            other => panic!("Expected CalculationError, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_validates_rate() {
        let rates: RateTable = serde_json::from_str("\"1500.50\"").unwrap();
        assert_eq!(rates.base_rate(), dec("1500.50"));

        let invalid: Result<RateTable, _> = serde_json::from_str("\"-3\"");
        assert!(invalid.is_err());
    }
}
