//! Shift model and timestamp parsing.
//!
//! A [`Shift`] is a transient value: two timestamps plus the breakdown
//! derived from them. The breakdown is recomputed whenever the timestamps
//! change and is never edited on its own.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{calculate_total_pay, count_minutes};
use crate::error::{EngineError, EngineResult};

use super::{Breakdown, MinuteCounts, RateTable, SpecialDayLookup};

/// Formats accepted by [`parse_timestamp`], tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a wall-clock timestamp.
///
/// Accepts the `datetime-local` form `YYYY-MM-DDTHH:MM`, with optional
/// seconds and fractional seconds, and the same forms with a space instead
/// of `T`. No time zone is attached; the caller fixes the zone.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::parse_timestamp;
///
/// let entry = parse_timestamp("2025-07-06T06:00").unwrap();
/// assert_eq!(entry.to_string(), "2025-07-06 06:00:00");
///
/// assert!(parse_timestamp("2025-07-06").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> EngineResult<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| EngineError::InvalidTimestamp {
            value: value.to_string(),
            message: "expected YYYY-MM-DDTHH:MM[:SS]".to_string(),
        })
}

/// A work shift with its derived breakdown.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{parse_timestamp, Shift, SpecialDayCalendar};
/// use rust_decimal::Decimal;
///
/// let calendar = SpecialDayCalendar::from_date_keys(["2025-07-06"], [] as [&str; 0]).unwrap();
/// let shift = Shift::new(
///     parse_timestamp("2025-07-06T06:00").unwrap(),
///     parse_timestamp("2025-07-06T14:00").unwrap(),
///     &calendar,
/// )
/// .unwrap();
///
/// assert_eq!(shift.total_minutes(), 480);
/// assert_eq!(shift.breakdown().rddf, Decimal::new(800, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    minute_counts: MinuteCounts,
    breakdown: Breakdown,
}

impl Shift {
    /// Creates a shift and classifies every minute of it.
    ///
    /// Fails with [`EngineError::InvalidRange`] when `exit` is not after `entry`.
    pub fn new<L>(entry: NaiveDateTime, exit: NaiveDateTime, lookup: &L) -> EngineResult<Self>
    where
        L: SpecialDayLookup + ?Sized,
    {
        let minute_counts = count_minutes(entry, exit, lookup)?;
        Ok(Self {
            entry,
            exit,
            breakdown: minute_counts.to_breakdown(),
            minute_counts,
        })
    }

    /// Moves the shift to new timestamps and recomputes the breakdown.
    ///
    /// On error the shift is left unchanged.
    pub fn reschedule<L>(
        &mut self,
        entry: NaiveDateTime,
        exit: NaiveDateTime,
        lookup: &L,
    ) -> EngineResult<()>
    where
        L: SpecialDayLookup + ?Sized,
    {
        *self = Self::new(entry, exit, lookup)?;
        Ok(())
    }

    /// The entry timestamp.
    pub fn entry(&self) -> NaiveDateTime {
        self.entry
    }

    /// The exit timestamp (exclusive).
    pub fn exit(&self) -> NaiveDateTime {
        self.exit
    }

    /// Whole minutes between entry and exit.
    pub fn total_minutes(&self) -> u64 {
        self.minute_counts.total()
    }

    /// Exact minutes per category.
    pub fn minute_counts(&self) -> &MinuteCounts {
        &self.minute_counts
    }

    /// Rounded hours per category.
    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    /// Total pay for this shift at the given rates.
    pub fn total_pay(&self, rates: &RateTable) -> EngineResult<Decimal> {
        calculate_total_pay(&self.breakdown, rates.base_rate())
    }
}
