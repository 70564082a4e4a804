//! Request types for the Shift Pay Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{parse_date_key, parse_timestamp};

/// Request body for the `/calculate` endpoint.
///
/// Timestamps are kept as strings so that the accepted formats, including the
/// `YYYY-MM-DDTHH:MM` form of a browser `datetime-local` input, are handled by
/// [`parse_timestamp`] and reported as `INVALID_TIMESTAMP` on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The shift entry timestamp.
    pub entry: String,
    /// The shift exit timestamp (exclusive).
    pub exit: String,
    /// Optional override for the configured base hourly rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<Decimal>,
    /// Extra special days (`YYYY-MM-DD`) on top of the configured calendar.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_days: Vec<String>,
}

impl CalculationRequest {
    /// Creates a request for a shift with no overrides.
    pub fn new(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
            base_rate: None,
            special_days: Vec::new(),
        }
    }

    /// Parses the entry and exit timestamps.
    pub fn parse_times(&self) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
        Ok((parse_timestamp(&self.entry)?, parse_timestamp(&self.exit)?))
    }

    /// Parses the extra special days.
    pub fn parse_special_days(&self) -> EngineResult<Vec<NaiveDate>> {
        self.special_days
            .iter()
            .map(|key| parse_date_key(key))
            .collect()
    }
}
