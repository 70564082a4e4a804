//! Calculation result models for the Shift Pay Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a shift calculation, including the breakdown,
//! per-category pay lines, the total and an audit trace.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Breakdown, MinuteCounts, PayCategory};

/// Represents a single line item in a pay calculation.
///
/// Each pay line captures the hours worked in one category, the multiplier
/// and effective rate that apply, and the resulting amount.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{PayLine, PayCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay_line = PayLine {
///     category: PayCategory::Rno,
///     description: PayCategory::Rno.description().to_string(),
///     hours: Decimal::from_str("4.00").unwrap(),
///     multiplier: Decimal::from_str("1.35").unwrap(),
///     rate: Decimal::from_str("8355.3255").unwrap(),
///     amount: Decimal::from_str("33421.3020").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The pay category of this line.
    pub category: PayCategory,
    /// A human-readable description of the category.
    pub description: String,
    /// The rounded hours worked in this category.
    pub hours: Decimal,
    /// The surcharge multiplier for this category.
    pub multiplier: Decimal,
    /// The effective hourly rate (base rate times multiplier).
    pub rate: Decimal,
    /// The amount for this line (hours times rate), unrounded.
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag conditions the engine does not resolve, such as a shift
/// that crosses a daylight-saving change in the configured zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a shift calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The shift entry timestamp.
    pub entry: NaiveDateTime,
    /// The shift exit timestamp (exclusive).
    pub exit: NaiveDateTime,
    /// Whole minutes between entry and exit.
    pub total_minutes: u64,
    /// The base hourly rate used.
    pub base_rate: Decimal,
    /// Currency code for display purposes.
    pub currency: String,
    /// Rounded hours per category.
    pub breakdown: Breakdown,
    /// Exact minutes per category.
    pub minute_counts: MinuteCounts,
    /// One line per category with non-zero hours.
    pub pay_lines: Vec<PayLine>,
    /// The total pay, unrounded.
    pub total_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
