//! Error types for the Shift Pay Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while classifying and paying a shift.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Shift Pay Engine.
///
/// Every failure is a local validation or configuration problem. The engine
/// never returns a partial result alongside an error.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The exit timestamp is not strictly after the entry timestamp.
    #[error("Invalid range: exit {exit} is not after entry {entry}")]
    InvalidRange {
        /// The entry timestamp.
        entry: NaiveDateTime,
        /// The exit timestamp.
        exit: NaiveDateTime,
    },

    /// A timestamp could not be parsed into a date-time.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The base hourly rate is zero or negative.
    #[error("Invalid rate {rate}: base rate must be positive")]
    InvalidRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// A special-day key is not a `YYYY-MM-DD` date.
    #[error("Invalid date key '{key}': expected YYYY-MM-DD")]
    InvalidDateKey {
        /// The rejected key.
        key: String,
    },

    /// The shift is longer than the configured maximum.
    #[error("Shift of {minutes} minutes exceeds the maximum of {max_minutes} minutes")]
    ShiftTooLong {
        /// The length of the rejected shift in whole minutes.
        minutes: i64,
        /// The configured maximum in minutes.
        max_minutes: i64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
