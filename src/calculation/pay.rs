//! Pay calculation.
//!
//! Converts a [`Breakdown`] into money: every category's hours are paid at
//! the base rate times the category multiplier. The total is not rounded;
//! rounding for display belongs to the presentation layer.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, PayCategory, PayLine, RateTable};

/// Calculates the total pay for a breakdown.
///
/// Total = Σ hours × base rate × multiplier over all eight categories.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRate`] when `base_rate` is zero or negative,
/// and [`EngineError::CalculationError`] when the total does not fit in a
/// `Decimal`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::calculate_total_pay;
/// use shift_pay_engine::models::Breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = Breakdown {
///     rdo: Decimal::from_str("8.00").unwrap(),
///     ..Breakdown::default()
/// };
/// let total = calculate_total_pay(&breakdown, Decimal::from_str("6189.13").unwrap()).unwrap();
/// assert_eq!(total, Decimal::from_str("49513.04").unwrap());
/// ```
pub fn calculate_total_pay(breakdown: &Breakdown, base_rate: Decimal) -> EngineResult<Decimal> {
    let rates = RateTable::new(base_rate)?;
    breakdown
        .iter()
        .filter(|(_, hours)| !hours.is_zero())
        .try_fold(Decimal::ZERO, |total, (category, hours)| {
            let amount = line_amount(category, hours, &rates)?;
            total
                .checked_add(amount)
                .ok_or_else(|| overflow(format!("total pay overflows after {}", category)))
        })
}

/// Builds one pay line per category with non-zero hours.
///
/// The amounts of the returned lines add up to
/// [`calculate_total_pay`] for the same breakdown and rate.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when a rate or amount does not
/// fit in a `Decimal`.
pub fn calculate_pay_lines(breakdown: &Breakdown, rates: &RateTable) -> EngineResult<Vec<PayLine>> {
    breakdown
        .iter()
        .filter(|(_, hours)| !hours.is_zero())
        .map(|(category, hours)| {
            Ok(PayLine {
                category,
                description: category.description().to_string(),
                hours,
                multiplier: category.multiplier(),
                rate: rates.rate_for(category)?,
                amount: line_amount(category, hours, rates)?,
            })
        })
        .collect()
}

/// Hours times the category rate, checked for overflow.
fn line_amount(category: PayCategory, hours: Decimal, rates: &RateTable) -> EngineResult<Decimal> {
    hours
        .checked_mul(rates.rate_for(category)?)
        .ok_or_else(|| overflow(format!("{} hours of {} overflow", hours, category)))
}

fn overflow(message: String) -> EngineError {
    EngineError::CalculationError { message }
}
