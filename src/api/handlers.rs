//! HTTP request handlers for the Shift Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_pay_lines, calculate_total_pay, check_time_zone, count_minutes,
    count_minutes_segmented, validate_range,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, CalculationResult, RateTable, SpecialDayCalendar, SpecialDayLookup,
};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalendarResponse};
use super::state::AppState;

/// Shifts longer than this are counted by segment instead of minute by minute.
const MINUTE_WALK_LIMIT: u64 = 24 * 60;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calendar", get(calendar_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a shift and returns its breakdown and pay.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                entry = %result.entry,
                exit = %result.exit,
                total_minutes = result.total_minutes,
                total_pay = %result.total_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /calendar endpoint.
///
/// Returns the configured Sundays and holidays.
async fn calendar_handler(State(state): State<AppState>) -> Json<CalendarResponse> {
    let config = state.config();
    debug!(special_days = config.calendar().len(), "Serving calendar");
    Json(CalendarResponse::new(
        config.calendar(),
        config.engine().time_zone.clone(),
    ))
}

/// The configured calendar plus the extra days sent with one request.
struct RequestCalendar<'a> {
    configured: &'a SpecialDayCalendar,
    extra: BTreeSet<NaiveDate>,
}

impl SpecialDayLookup for RequestCalendar<'_> {
    fn is_special_day(&self, date: NaiveDate) -> bool {
        self.extra.contains(&date) || self.configured.is_special_day(date)
    }
}

/// Calculates the breakdown and pay for one shift.
fn perform_calculation(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();

    let (entry, exit) = request.parse_times()?;
    let total_minutes = validate_range(entry, exit)?;

    let max_minutes = config.config().max_shift_minutes();
    let minutes = i64::try_from(total_minutes).unwrap_or(i64::MAX);
    if minutes > max_minutes {
        return Err(EngineError::ShiftTooLong {
            minutes,
            max_minutes,
        });
    }

    let rates = match request.base_rate {
        Some(rate) => RateTable::new(rate)?,
        None => *config.rates(),
    };

    let lookup = RequestCalendar {
        configured: config.calendar(),
        extra: request.parse_special_days()?.into_iter().collect(),
    };

    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "shift_validation".to_string(),
        rule_name: "Shift Validation".to_string(),
        input: serde_json::json!({
            "entry": entry,
            "exit": exit,
        }),
        output: serde_json::json!({
            "total_minutes": total_minutes,
            "max_minutes": max_minutes,
        }),
        reasoning: format!(
            "Exit is after entry; {} whole minutes are classified, within the limit of {}",
            total_minutes, max_minutes
        ),
    });

    // Step 2: classify every minute
    let segmented = total_minutes > MINUTE_WALK_LIMIT;
    let minute_counts = if segmented {
        count_minutes_segmented(entry, exit, &lookup)?
    } else {
        count_minutes(entry, exit, &lookup)?
    };
    debug!(total_minutes, segmented, "Minutes classified");

    let special_days = special_days_in_shift(entry, total_minutes, &lookup);
    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "minute_classification".to_string(),
        rule_name: "Minute Classification".to_string(),
        input: serde_json::json!({
            "strategy": if segmented { "segmented" } else { "minute_walk" },
            "special_days": special_days,
        }),
        output: serde_json::json!(minute_counts),
        reasoning: format!(
            "Night runs 21:00-06:00, minutes from offset 480 are overtime; {} of the shift's dates are special days",
            special_days.len()
        ),
    });

    // Step 3: convert minutes to rounded hours
    let breakdown = minute_counts.to_breakdown();
    let drift_minutes = breakdown.total_hours() * Decimal::from(60) - Decimal::from(total_minutes);
    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "hour_rounding".to_string(),
        rule_name: "Hour Rounding".to_string(),
        input: serde_json::json!(minute_counts),
        output: serde_json::json!({
            "breakdown": breakdown,
            "drift_minutes": drift_minutes,
        }),
        reasoning: format!(
            "Each category rounded to 2 decimal places on its own; rounded total differs from the shift by {} minutes",
            drift_minutes
        ),
    });

    // Step 4: pay
    let pay_lines = calculate_pay_lines(&breakdown, &rates)?;
    let total_pay = calculate_total_pay(&breakdown, rates.base_rate())?;
    audit_steps.push(AuditStep {
        step_number: 4,
        rule_id: "pay_calculation".to_string(),
        rule_name: "Pay Calculation".to_string(),
        input: serde_json::json!({
            "base_rate": rates.base_rate(),
            "overridden": request.base_rate.is_some(),
        }),
        output: serde_json::json!({
            "pay_lines": pay_lines.len(),
            "total_pay": total_pay,
        }),
        reasoning: format!(
            "{} hours paid at {} per hour times each category's multiplier",
            breakdown.total_hours(),
            rates.base_rate()
        ),
    });

    let warnings = config
        .time_zone()
        .map(|tz| check_time_zone(entry, exit, tz))
        .unwrap_or_default();

    let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        entry,
        exit,
        total_minutes,
        base_rate: rates.base_rate(),
        currency: config.engine().currency.clone(),
        breakdown,
        minute_counts,
        pay_lines,
        total_pay,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}

/// Dates touched by the shift's minutes that are special days.
fn special_days_in_shift<L>(entry: NaiveDateTime, total_minutes: u64, lookup: &L) -> Vec<NaiveDate>
where
    L: SpecialDayLookup + ?Sized,
{
    if total_minutes == 0 {
        return Vec::new();
    }
    let last_minute = entry + Duration::minutes(total_minutes as i64 - 1);
    entry
        .date()
        .iter_days()
        .take_while(|date| *date <= last_minute.date())
        .filter(|date| lookup.is_special_day(*date))
        .collect()
}
