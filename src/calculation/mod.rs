//! Calculation logic for the Shift Pay Engine.
//!
//! This module contains minute classification, breakdown aggregation (both the
//! minute-by-minute walk and the equivalent segmented count), pay calculation,
//! and time-zone consistency checks.

mod aggregator;
mod classifier;
mod pay;
mod segmentation;
mod time_zone;

pub use aggregator::{calculate_breakdown, count_minutes, validate_range};
pub use classifier::{
    NIGHT_END_HOUR, NIGHT_START_HOUR, ORDINARY_MINUTES_THRESHOLD, classify_minute,
    is_night_hour, is_overtime_minute,
};
pub use pay::{calculate_pay_lines, calculate_total_pay};
pub use segmentation::{ShiftSegment, count_minutes_segmented, segment_shift};
pub use time_zone::{AMBIGUOUS_LOCAL_TIME_WARNING, DST_TRANSITION_WARNING, check_time_zone};
