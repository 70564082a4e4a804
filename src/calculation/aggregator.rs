//! Breakdown aggregation.
//!
//! Walks every whole minute of a shift, classifies it, and accumulates the
//! per-category minute counts that make up a [`Breakdown`].

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, MinuteCounts, SpecialDayLookup};

use super::classify_minute;

/// Validates a shift range and returns its length in whole minutes.
///
/// Seconds beyond the last whole minute are discarded. Fails with
/// [`EngineError::InvalidRange`] when `exit` is not strictly after `entry`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::validate_range;
/// use chrono::NaiveDateTime;
///
/// let entry = NaiveDateTime::parse_from_str("2024-06-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let exit = NaiveDateTime::parse_from_str("2024-06-18 02:00:59", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(validate_range(entry, exit).unwrap(), 240);
/// assert!(validate_range(exit, entry).is_err());
/// ```
pub fn validate_range(entry: NaiveDateTime, exit: NaiveDateTime) -> EngineResult<u64> {
    if exit <= entry {
        return Err(EngineError::InvalidRange { entry, exit });
    }

    let minutes = (exit - entry).num_minutes();
    u64::try_from(minutes).map_err(|_| EngineError::CalculationError {
        message: format!("negative shift length of {} minutes", minutes),
    })
}

/// Counts the minutes of a shift in each pay category.
///
/// For every offset `i` in `[0, N)`, where `N` is the number of whole minutes
/// between `entry` and `exit`, the instant `entry + i minutes` is classified
/// using its wall-clock hour and whether its date is a special day.
///
/// # Arguments
///
/// * `entry` - The shift entry timestamp
/// * `exit` - The shift exit timestamp (exclusive)
/// * `lookup` - The special-day set, keyed in the same zone as the timestamps
///
/// # Returns
///
/// The exact minute counts; their total equals `N`.
pub fn count_minutes<L>(
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    lookup: &L,
) -> EngineResult<MinuteCounts>
where
    L: SpecialDayLookup + ?Sized,
{
    let total_minutes = validate_range(entry, exit)?;
    let one_minute = Duration::minutes(1);

    let mut counts = MinuteCounts::default();
    let mut current = entry;
    for elapsed in 0..total_minutes {
        let category = classify_minute(
            elapsed,
            current.hour(),
            lookup.is_special_day(current.date()),
        );
        counts.increment(category);
        current += one_minute;
    }

    Ok(counts)
}

/// Calculates the rounded hour breakdown of a shift.
///
/// Each category's minute count is divided by 60 and rounded to two decimal
/// places on its own, so the fields may not add up exactly to the shift length.
///
/// # Examples
///
/// ## Sunday daytime shift of exactly eight hours
///
/// ```
/// use shift_pay_engine::calculation::calculate_breakdown;
/// use shift_pay_engine::models::{parse_timestamp, SpecialDayCalendar};
/// use rust_decimal::Decimal;
///
/// let sundays = SpecialDayCalendar::from_date_keys(["2025-07-06"], [] as [&str; 0]).unwrap();
/// let breakdown = calculate_breakdown(
///     parse_timestamp("2025-07-06T06:00").unwrap(),
///     parse_timestamp("2025-07-06T14:00").unwrap(),
///     &sundays,
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.rddf, Decimal::new(800, 2));
/// assert_eq!(breakdown.hedo, Decimal::ZERO);
/// ```
///
/// ## Ordinary-day shift with overtime
///
/// ```
/// use shift_pay_engine::calculation::calculate_breakdown;
/// use shift_pay_engine::models::{parse_timestamp, SpecialDayCalendar};
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_breakdown(
///     parse_timestamp("2024-06-17T06:00").unwrap(),
///     parse_timestamp("2024-06-17T16:00").unwrap(),
///     &SpecialDayCalendar::new(),
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.rdo, Decimal::new(800, 2));
/// assert_eq!(breakdown.hedo, Decimal::new(200, 2));
/// ```
pub fn calculate_breakdown<L>(
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    lookup: &L,
) -> EngineResult<Breakdown>
where
    L: SpecialDayLookup + ?Sized,
{
    Ok(count_minutes(entry, exit, lookup)?.to_breakdown())
}
