//! Configuration types for the Shift Pay Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`EngineConfig`] assembled from them.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{DEFAULT_BASE_RATE, PublicHoliday, RateTable, SpecialDayCalendar};

/// Default upper bound on the length of a single shift, in hours.
pub const DEFAULT_MAX_SHIFT_HOURS: u32 = 168;

fn default_base_rate() -> Decimal {
    DEFAULT_BASE_RATE
}

fn default_currency() -> String {
    "COP".to_string()
}

fn default_max_shift_hours() -> u32 {
    DEFAULT_MAX_SHIFT_HOURS
}

/// Engine settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// A human-readable name for this configuration.
    pub name: String,
    /// Currency code used when displaying amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// The base hourly rate before category multipliers.
    #[serde(default = "default_base_rate")]
    pub base_rate: Decimal,
    /// Longest shift, in hours, the service will classify.
    #[serde(default = "default_max_shift_hours")]
    pub max_shift_hours: u32,
    /// IANA zone the timestamps and calendar are expressed in, if known.
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Special-day lists from `calendar.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    /// Sundays, as `YYYY-MM-DD`.
    #[serde(default)]
    pub sundays: Vec<NaiveDate>,
    /// Designated holidays.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

impl CalendarConfig {
    /// Builds the lookup calendar from the configured lists.
    pub fn to_calendar(&self) -> SpecialDayCalendar {
        let mut calendar = SpecialDayCalendar::new();
        for sunday in &self.sundays {
            calendar.add_sunday(*sunday);
        }
        for holiday in &self.holidays {
            calendar.add_holiday(holiday.date, holiday.name.clone());
        }
        calendar
    }
}

/// The complete, validated engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Sundays and holidays.
    calendar: SpecialDayCalendar,
    /// Validated base rate.
    rates: RateTable,
    /// Parsed time zone, when configured.
    time_zone: Option<Tz>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: EngineMetadata,
        calendar: SpecialDayCalendar,
        rates: RateTable,
        time_zone: Option<Tz>,
    ) -> Self {
        Self {
            metadata,
            calendar,
            rates,
            time_zone,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the special-day calendar.
    pub fn calendar(&self) -> &SpecialDayCalendar {
        &self.calendar
    }

    /// Returns the configured rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the configured time zone, if any.
    pub fn time_zone(&self) -> Option<Tz> {
        self.time_zone
    }

    /// Longest accepted shift in whole minutes.
    pub fn max_shift_minutes(&self) -> i64 {
        i64::from(self.metadata.max_shift_hours) * 60
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            EngineMetadata {
                name: "default".to_string(),
                currency: default_currency(),
                base_rate: DEFAULT_BASE_RATE,
                max_shift_hours: DEFAULT_MAX_SHIFT_HOURS,
                time_zone: None,
            },
            SpecialDayCalendar::new(),
            RateTable::default(),
            None,
        )
    }
}
