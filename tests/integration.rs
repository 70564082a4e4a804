//! Integration tests for the Shift Pay Engine HTTP API.
//!
//! This test suite drives the router end to end and covers:
//! - Ordinary-day daytime and night minutes
//! - Sunday and holiday minutes, including shifts crossing midnight
//! - Overtime from the ninth hour
//! - Per-category rounding
//! - Error cases
//! - The calendar endpoint

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use shift_pay_engine::api::{AppState, create_router};
use shift_pay_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

const CATEGORIES: [&str; 8] = ["RDO", "RNO", "RDDF", "RNDF", "HEDO", "HENO", "HEDDF", "HENDF"];

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn create_request(entry: &str, exit: &str) -> Value {
    json!({ "entry": entry, "exit": exit })
}

async fn calculate_ok(entry: &str, exit: &str) -> Value {
    let (status, result) = post_calculate(create_router_for_test(), create_request(entry, exit)).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {}", result);
    result
}

/// Asserts the breakdown matches `expected`; unlisted categories must be zero.
fn assert_breakdown(result: &Value, expected: &[(&str, &str)]) {
    for code in CATEGORIES {
        let actual = result["breakdown"][code]
            .as_str()
            .unwrap_or_else(|| panic!("breakdown is missing {}", code));
        let wanted = expected
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, hours)| *hours)
            .unwrap_or("0");
        assert_eq!(
            decimal(actual),
            decimal(wanted),
            "Expected {} = {}, got {}",
            code,
            wanted,
            actual
        );
    }
}

fn assert_total_pay(result: &Value, expected: &str) {
    let actual = result["total_pay"].as_str().unwrap();
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "Expected total_pay {}, got {}",
        expected,
        actual
    );
}

fn assert_error_code(result: &Value, expected: &str) {
    assert_eq!(result["code"], expected, "unexpected error body: {}", result);
}

// =============================================================================
// SECTION 1: Ordinary Day
// =============================================================================

#[tokio::test]
async fn test_ordinary_day_8h_daytime() {
    // Monday 2024-06-17, 06:00-14:00
    // Expected: 8 * 6189.13 = 49513.04
    let result = calculate_ok("2024-06-17T06:00", "2024-06-17T14:00").await;

    assert_breakdown(&result, &[("RDO", "8.00")]);
    assert_total_pay(&result, "49513.04");
    assert_eq!(result["total_minutes"], 480);
    assert_eq!(result["currency"], "COP");
}

#[tokio::test]
async fn test_ordinary_day_night_across_midnight() {
    // Monday 22:00 to Tuesday 02:00, all night minutes
    // Expected: 4 * 6189.13 * 1.35 = 33421.302
    let result = calculate_ok("2024-06-17T22:00", "2024-06-18T02:00").await;

    assert_breakdown(&result, &[("RNO", "4.00")]);
    assert_total_pay(&result, "33421.302");
}

#[tokio::test]
async fn test_ordinary_day_evening_crosses_night_start() {
    // 17:00-21:00 day, 21:00-23:00 night
    let result = calculate_ok("2024-06-17T17:00", "2024-06-17T23:00").await;

    assert_breakdown(&result, &[("RDO", "4.00"), ("RNO", "2.00")]);
}

#[tokio::test]
async fn test_ordinary_day_early_morning_crosses_night_end() {
    // 04:00-06:00 night, 06:00-08:00 day
    let result = calculate_ok("2024-06-18T04:00", "2024-06-18T08:00").await;

    assert_breakdown(&result, &[("RNO", "2.00"), ("RDO", "2.00")]);
}

// =============================================================================
// SECTION 2: Sundays and Holidays
// =============================================================================

#[tokio::test]
async fn test_sunday_8h_daytime() {
    // Sunday 2025-07-06 is in the configured calendar
    // Expected: 8 * 6189.13 * 1.75 = 86647.82
    let result = calculate_ok("2025-07-06T06:00", "2025-07-06T14:00").await;

    assert_breakdown(&result, &[("RDDF", "8.00")]);
    assert_total_pay(&result, "86647.82");
}

#[tokio::test]
async fn test_saturday_night_into_sunday() {
    // Saturday 22:00-24:00 ordinary night, Sunday 00:00-04:00 special night
    let result = calculate_ok("2025-07-05T22:00", "2025-07-06T04:00").await;

    assert_breakdown(&result, &[("RNO", "2.00"), ("RNDF", "4.00")]);
}

#[tokio::test]
async fn test_sunday_evening_into_monday() {
    // Sunday 20:00-21:00 special day, 21:00-24:00 special night,
    // Monday 00:00-02:00 ordinary night
    let result = calculate_ok("2025-07-06T20:00", "2025-07-07T02:00").await;

    assert_breakdown(&result, &[("RDDF", "1.00"), ("RNDF", "3.00"), ("RNO", "2.00")]);
}

#[tokio::test]
async fn test_weekday_holiday_with_overtime() {
    // Thursday 2025-08-07 is a configured holiday
    // 12:00-20:00 ordinary special day, 20:00-21:00 overtime day, 21:00-22:00 overtime night
    let result = calculate_ok("2025-08-07T12:00", "2025-08-07T22:00").await;

    assert_breakdown(
        &result,
        &[("RDDF", "8.00"), ("HEDDF", "1.00"), ("HENDF", "1.00")],
    );
    // 8 * 1.75 + 1 * 2.00 + 1 * 2.50 = 18.50 base-rate hours
    assert_total_pay(&result, "114498.905");
}

#[tokio::test]
async fn test_extra_special_day_in_request() {
    // Monday 2024-06-17 becomes special for this request only
    let request = json!({
        "entry": "2024-06-17T06:00",
        "exit": "2024-06-17T14:00",
        "special_days": ["2024-06-17"]
    });
    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, &[("RDDF", "8.00")]);

    // The configured calendar is unchanged for the next request
    let result = calculate_ok("2024-06-17T06:00", "2024-06-17T14:00").await;
    assert_breakdown(&result, &[("RDO", "8.00")]);
}

// =============================================================================
// SECTION 3: Overtime
// =============================================================================

#[tokio::test]
async fn test_ordinary_day_10h_with_daytime_overtime() {
    // Expected: 8 * 6189.13 + 2 * 6189.13 * 1.25 = 64985.865
    let result = calculate_ok("2024-06-17T06:00", "2024-06-17T16:00").await;

    assert_breakdown(&result, &[("RDO", "8.00"), ("HEDO", "2.00")]);
    assert_total_pay(&result, "64985.865");

    let pay_lines = result["pay_lines"].as_array().unwrap();
    assert_eq!(pay_lines.len(), 2);
    assert_eq!(pay_lines[1]["category"], "HEDO");
    assert_eq!(decimal(pay_lines[1]["multiplier"].as_str().unwrap()), decimal("1.25"));
}

#[tokio::test]
async fn test_overtime_running_into_night() {
    // 13:00-21:00 ordinary, 21:00-01:00 overtime night
    let result = calculate_ok("2024-06-17T13:00", "2024-06-18T01:00").await;

    assert_breakdown(&result, &[("RDO", "8.00"), ("HENO", "4.00")]);
}

#[tokio::test]
async fn test_overtime_running_into_sunday() {
    // Saturday 18:00-21:00 day, 21:00-24:00 night, then 02:00 on Sunday
    // ends the 8 ordinary hours; Sunday 02:00-04:00 is overtime special night
    let result = calculate_ok("2025-07-05T18:00", "2025-07-06T04:00").await;

    assert_breakdown(
        &result,
        &[
            ("RDO", "3.00"),
            ("RNO", "3.00"),
            ("RNDF", "2.00"),
            ("HENDF", "2.00"),
        ],
    );
}

#[tokio::test]
async fn test_two_day_shift_is_fully_classified() {
    let result = calculate_ok("2025-07-05T06:00", "2025-07-07T06:00").await;

    assert_eq!(result["total_minutes"], 2880);
    let counted: u64 = CATEGORIES
        .iter()
        .map(|code| result["minute_counts"][code].as_u64().unwrap())
        .sum();
    assert_eq!(counted, 2880);
}

// =============================================================================
// SECTION 4: Rounding
// =============================================================================

#[tokio::test]
async fn test_twenty_minute_shift_rounds_to_033() {
    let result = calculate_ok("2024-06-17T06:00", "2024-06-17T06:20").await;

    assert_breakdown(&result, &[("RDO", "0.33")]);
    assert_eq!(result["minute_counts"]["RDO"], 20);
}

#[tokio::test]
async fn test_categories_round_independently() {
    // 20:40-21:00 RDO (20 min), 21:00-21:20 RNO (20 min)
    // 0.33 + 0.33 = 0.66 for a 40-minute shift
    let result = calculate_ok("2024-06-17T20:40", "2024-06-17T21:20").await;

    assert_breakdown(&result, &[("RDO", "0.33"), ("RNO", "0.33")]);
    let drift = result["audit_trace"]["steps"][2]["output"]["drift_minutes"]
        .as_str()
        .unwrap();
    assert_eq!(decimal(drift), decimal("-0.4"));
}

#[tokio::test]
async fn test_seconds_are_truncated_to_whole_minutes() {
    // 9 minutes and 30 seconds counts as 9 minutes
    let result = calculate_ok("2024-06-17T06:00:30", "2024-06-17T06:10:00").await;

    assert_eq!(result["total_minutes"], 9);
    assert_breakdown(&result, &[("RDO", "0.15")]);
}

#[tokio::test]
async fn test_sub_minute_shift_is_all_zero() {
    let result = calculate_ok("2024-06-17T06:00:00", "2024-06-17T06:00:30").await;

    assert_eq!(result["total_minutes"], 0);
    assert_breakdown(&result, &[]);
    assert_total_pay(&result, "0");
    assert!(result["pay_lines"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_exit_before_entry_returns_400() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request("2024-06-17T14:00", "2024-06-17T06:00"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "INVALID_RANGE");
}

#[tokio::test]
async fn test_exit_equal_to_entry_returns_400() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request("2024-06-17T06:00", "2024-06-17T06:00"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "INVALID_RANGE");
}

#[tokio::test]
async fn test_unparseable_timestamp_returns_400() {
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request("2024-06-17", "2024-06-17T06:00"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "INVALID_TIMESTAMP");
}

#[tokio::test]
async fn test_negative_rate_returns_400() {
    let request = json!({
        "entry": "2024-06-17T06:00",
        "exit": "2024-06-17T14:00",
        "base_rate": "-1"
    });
    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "INVALID_RATE");
}

#[tokio::test]
async fn test_overflowing_base_rate_returns_json_error() {
    // 8 h at 1e28 does not fit in a Decimal
    let request = json!({
        "entry": "2024-06-17T06:00",
        "exit": "2024-06-17T14:00",
        "base_rate": "10000000000000000000000000000"
    });
    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_code(&result, "CALCULATION_ERROR");
}

#[tokio::test]
async fn test_bad_special_day_returns_400() {
    let request = json!({
        "entry": "2024-06-17T06:00",
        "exit": "2024-06-17T14:00",
        "special_days": ["June 17"]
    });
    let (status, result) = post_calculate(create_router_for_test(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "INVALID_DATE_KEY");
}

#[tokio::test]
async fn test_shift_over_a_week_returns_400() {
    // 169 hours against the configured limit of 168
    let (status, result) = post_calculate(
        create_router_for_test(),
        create_request("2025-07-01T00:00", "2025-07-08T01:00"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "SHIFT_TOO_LONG");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, result) = send(
        create_router_for_test(),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"entry\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_entry_returns_400() {
    let (status, result) =
        post_calculate(create_router_for_test(), json!({ "exit": "2024-06-17T06:00" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&result, "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("entry"));
}

// =============================================================================
// SECTION 6: Calendar and Response Shape
// =============================================================================

#[tokio::test]
async fn test_calendar_endpoint_lists_configured_days() {
    let (status, result) = send(
        create_router_for_test(),
        Request::builder()
            .method("GET")
            .uri("/calendar")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sundays = result["sundays"].as_array().unwrap();
    assert!(sundays.contains(&json!("2024-06-16")));
    assert!(sundays.contains(&json!("2025-12-28")));

    let holidays = result["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 9);
    assert!(holidays.iter().any(|h| h["date"] == "2025-08-07"));
}

#[tokio::test]
async fn test_result_echoes_shift_and_trace() {
    let result = calculate_ok("2024-06-17T06:00", "2024-06-17T14:00").await;

    assert_eq!(result["entry"], "2024-06-17T06:00:00");
    assert_eq!(result["exit"], "2024-06-17T14:00:00");
    assert!(result["calculation_id"].is_string());
    assert_eq!(decimal(result["base_rate"].as_str().unwrap()), decimal("6189.13"));

    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"], i + 1);
    }
    assert!(result["audit_trace"]["warnings"].as_array().unwrap().is_empty());
    assert!(result["audit_trace"]["duration_us"].is_u64());
}
