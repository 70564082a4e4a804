//! Core data models for the Shift Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;
mod calendar;
mod rate_table;
mod shift;

pub use breakdown::{Breakdown, HOURS_DECIMAL_PLACES, MinuteCounts, PayCategory, minutes_to_hours};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, PayLine};
pub use calendar::{
    DATE_KEY_FORMAT, PublicHoliday, SpecialDayCalendar, SpecialDayLookup, parse_date_key,
};
pub use rate_table::{DEFAULT_BASE_RATE, RateTable};
pub use shift::{Shift, parse_timestamp};
