//! Special-day calendar models.
//!
//! This module contains the [`SpecialDayLookup`] seam through which the
//! engine asks whether a date is a Sunday or holiday, and the
//! [`SpecialDayCalendar`] type that callers build from precomputed date lists.
//! The engine never derives a calendar; it only performs membership tests.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Date key format used by special-day lists.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Answers whether a calendar date is a special day (Sunday or holiday).
///
/// The date must be evaluated in the same wall-clock zone that was used to
/// build the underlying set.
pub trait SpecialDayLookup {
    /// Returns `true` if `date` is a Sunday or designated holiday.
    fn is_special_day(&self, date: NaiveDate) -> bool;
}

impl SpecialDayLookup for HashSet<NaiveDate> {
    fn is_special_day(&self, date: NaiveDate) -> bool {
        self.contains(&date)
    }
}

impl SpecialDayLookup for BTreeSet<NaiveDate> {
    fn is_special_day(&self, date: NaiveDate) -> bool {
        self.contains(&date)
    }
}

/// Parses a `YYYY-MM-DD` date key.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::parse_date_key;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date_key("2025-12-25").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
/// );
/// assert!(parse_date_key("25/12/2025").is_err());
/// ```
pub fn parse_date_key(key: &str) -> EngineResult<NaiveDate> {
    let trimmed = key.trim();
    if trimmed.len() != 10 {
        return Err(EngineError::InvalidDateKey {
            key: key.to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT).map_err(|_| EngineError::InvalidDateKey {
        key: key.to_string(),
    })
}

/// A designated public holiday.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
///     name: "Navidad".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// The set of Sundays and holidays used to classify minutes.
///
/// Sundays and holidays are kept apart for reporting, but lookups treat
/// them as one set. A date may appear in both.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{SpecialDayCalendar, SpecialDayLookup};
/// use chrono::NaiveDate;
///
/// let calendar = SpecialDayCalendar::from_date_keys(
///     ["2025-07-06", "2025-07-13"],
///     ["2025-07-20"],
/// )
/// .unwrap();
///
/// assert!(calendar.is_special_day(NaiveDate::from_ymd_opt(2025, 7, 6).unwrap()));
/// assert!(calendar.is_special_day(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()));
/// assert!(!calendar.is_special_day(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialDayCalendar {
    sundays: BTreeSet<NaiveDate>,
    holidays: BTreeMap<NaiveDate, String>,
}

impl SpecialDayCalendar {
    /// Creates an empty calendar; every date is ordinary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from `YYYY-MM-DD` keys for Sundays and holidays.
    ///
    /// Holidays built this way carry an empty name.
    pub fn from_date_keys<S, H>(sundays: S, holidays: H) -> EngineResult<Self>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        let mut calendar = Self::new();
        for key in sundays {
            calendar.add_sunday(parse_date_key(key.as_ref())?);
        }
        for key in holidays {
            calendar.add_holiday(parse_date_key(key.as_ref())?, String::new());
        }
        Ok(calendar)
    }

    /// Marks a date as a Sunday.
    pub fn add_sunday(&mut self, date: NaiveDate) {
        self.sundays.insert(date);
    }

    /// Marks a date as a holiday. A second insert for the same date keeps
    /// the first non-empty name.
    pub fn add_holiday(&mut self, date: NaiveDate, name: impl Into<String>) {
        let name = name.into();
        let entry = self.holidays.entry(date).or_default();
        if entry.is_empty() {
            *entry = name;
        }
    }

    /// Whether the date is listed as a Sunday.
    pub fn is_sunday(&self, date: NaiveDate) -> bool {
        self.sundays.contains(&date)
    }

    /// Whether the date is listed as a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Listed Sundays in ascending order.
    pub fn sundays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.sundays.iter().copied()
    }

    /// Listed holidays in ascending date order.
    pub fn holidays(&self) -> impl Iterator<Item = PublicHoliday> + '_ {
        self.holidays.iter().map(|(date, name)| PublicHoliday {
            date: *date,
            name: name.clone(),
        })
    }

    /// The union of Sundays and holidays.
    pub fn special_days(&self) -> BTreeSet<NaiveDate> {
        self.sundays
            .iter()
            .chain(self.holidays.keys())
            .copied()
            .collect()
    }

    /// Number of distinct special dates.
    pub fn len(&self) -> usize {
        let holidays_off_sunday = self
            .holidays
            .keys()
            .filter(|date| !self.sundays.contains(date))
            .count();
        self.sundays.len() + holidays_off_sunday
    }

    /// Whether no special dates are listed.
    pub fn is_empty(&self) -> bool {
        self.sundays.is_empty() && self.holidays.is_empty()
    }
}

impl SpecialDayLookup for SpecialDayCalendar {
    fn is_special_day(&self, date: NaiveDate) -> bool {
        self.is_sunday(date) || self.is_holiday(date)
    }
}
