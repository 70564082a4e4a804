//! Segmented minute counting.
//!
//! Produces the same [`MinuteCounts`] as [`count_minutes`](super::count_minutes)
//! without visiting every minute. The shift is cut at each wall-clock hour
//! boundary and at the overtime threshold; all minutes inside one such
//! segment share their date, hour and overtime status, so one classification
//! per segment is enough. Cost grows with the number of hours, not minutes.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{MinuteCounts, PayCategory, SpecialDayLookup};

use super::{ORDINARY_MINUTES_THRESHOLD, classify_minute, validate_range};

/// A run of consecutive shift minutes that share one pay category.
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::segment_shift;
/// use shift_pay_engine::models::{parse_timestamp, PayCategory, SpecialDayCalendar};
///
/// let segments = segment_shift(
///     parse_timestamp("2024-06-17T20:30").unwrap(),
///     parse_timestamp("2024-06-17T21:30").unwrap(),
///     &SpecialDayCalendar::new(),
/// )
/// .unwrap();
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].category, PayCategory::Rdo);
/// assert_eq!(segments[0].minutes, 30);
/// assert_eq!(segments[1].category, PayCategory::Rno);
/// assert_eq!(segments[1].minutes, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSegment {
    /// The instant of the first minute in the segment.
    pub start_time: NaiveDateTime,
    /// Elapsed minutes from entry to the first minute of the segment.
    pub start_minute: u64,
    /// Number of minutes in the segment.
    pub minutes: u64,
    /// The category every minute of the segment belongs to.
    pub category: PayCategory,
}

/// Splits a shift into category-homogeneous segments.
///
/// Segments are chronological and adjacent segments with the same category
/// are merged. The minutes of all segments add up to the whole minutes of
/// the shift.
pub fn segment_shift<L>(
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    lookup: &L,
) -> EngineResult<Vec<ShiftSegment>>
where
    L: SpecialDayLookup + ?Sized,
{
    let total_minutes = validate_range(entry, exit)?;
    let mut segments: Vec<ShiftSegment> = Vec::new();
    let mut elapsed = 0u64;

    while elapsed < total_minutes {
        let instant = entry + Duration::minutes(elapsed as i64);
        let next_hour = start_of_hour(instant) + Duration::hours(1);

        let mut segment_end = first_minute_at_or_after(entry, next_hour).min(total_minutes);
        if elapsed < ORDINARY_MINUTES_THRESHOLD {
            segment_end = segment_end.min(ORDINARY_MINUTES_THRESHOLD);
        }

        let category = classify_minute(
            elapsed,
            instant.hour(),
            lookup.is_special_day(instant.date()),
        );
        let minutes = segment_end - elapsed;

        match segments.last_mut() {
            Some(last) if last.category == category => last.minutes += minutes,
            _ => segments.push(ShiftSegment {
                start_time: instant,
                start_minute: elapsed,
                minutes,
                category,
            }),
        }

        elapsed = segment_end;
    }

    Ok(segments)
}

/// Counts the minutes of a shift in each category by segment.
///
/// Always equal to [`count_minutes`](super::count_minutes) for the same input.
pub fn count_minutes_segmented<L>(
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    lookup: &L,
) -> EngineResult<MinuteCounts>
where
    L: SpecialDayLookup + ?Sized,
{
    let mut counts = MinuteCounts::default();
    for segment in segment_shift(entry, exit, lookup)? {
        counts.add(segment.category, segment.minutes);
    }
    Ok(counts)
}

/// Truncates an instant to the start of its wall-clock hour.
fn start_of_hour(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        - Duration::minutes(i64::from(instant.minute()))
        - Duration::seconds(i64::from(instant.second()))
        - Duration::nanoseconds(i64::from(instant.nanosecond()))
}

/// Smallest minute offset `i` such that `entry + i minutes >= instant`.
fn first_minute_at_or_after(entry: NaiveDateTime, instant: NaiveDateTime) -> u64 {
    let offset = instant - entry;
    if offset <= Duration::zero() {
        return 0;
    }

    let seconds = offset.num_seconds();
    let whole_minutes = (seconds / 60) as u64;
    if seconds % 60 != 0 || offset.subsec_nanos() != 0 {
        whole_minutes + 1
    } else {
        whole_minutes
    }
}
