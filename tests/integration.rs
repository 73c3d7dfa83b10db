//! Integration tests for the Net Pay Engine.
//!
//! This test suite covers the calculation scenarios end to end through the
//! HTTP API:
//! - Zero input
//! - The reference scenario
//! - Child tax credit absorbed by income tax, spilling into health
//!   contribution, and exceeding both
//! - Pension contribution independent of the credit
//! - Maternity benefit taxable and exempt
//! - Free-text form input
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use net_pay_engine::api::{create_router, AppState};
use net_pay_engine::calculation::compute;
use net_pay_engine::config::ConfigLoader;
use net_pay_engine::models::InputSet;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/hu_2025").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", body).await
}

/// Request for hourly wages only, with a child tax credit.
fn wage_request(hourly_wage: u32, regular_hours: u32, child_tax_credit: u32) -> Value {
    json!({
        "hourly_wage": hourly_wage,
        "regular_hours": regular_hours,
        "child_tax_credit": child_tax_credit
    })
}

fn breakdown_field(result: &Value, field: &str) -> Decimal {
    let raw = result["breakdown"][field]
        .as_str()
        .unwrap_or_else(|| panic!("breakdown.{} missing in {}", field, result));
    Decimal::from_str(raw).unwrap()
}

fn assert_breakdown(result: &Value, field: &str, expected: i64) {
    let actual = breakdown_field(result, field);
    assert_eq!(
        actual,
        Decimal::from(expected),
        "Expected {} = {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Core scenarios
// =============================================================================

#[tokio::test]
async fn test_zero_input_gives_all_zero_fields() {
    let (status, result) = post_calculate(json!({})).await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "net_total",
        "net_wages",
        "net_supplemental",
        "net_maternity_benefit",
        "income_tax_total",
        "health_contribution_total",
        "pension_contribution_total",
        "credit_used",
    ] {
        assert_breakdown(&result, field, 0);
    }
}

#[tokio::test]
async fn test_reference_scenario() {
    let body = json!({
        "hourly_wage": 2950,
        "regular_hours": 120,
        "overtime_hours": 8,
        "leave_hours": 40,
        "leave_hourly_rate": 3300,
        "variable_bonus": 99864,
        "shift_premium": 59568,
        "maternity_benefit_gross": 407220,
        "child_tax_credit": 149800,
        "maternity_benefit_taxable": true
    });
    let (status, result) = post_calculate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "net_total", 907635);
    assert_breakdown(&result, "net_wages", 479880);
    assert_breakdown(&result, "net_supplemental", 143489);
    assert_breakdown(&result, "net_maternity_benefit", 366498);
    assert_breakdown(&result, "income_tax_total", 0);
    assert_breakdown(&result, "health_contribution_total", 82232);
    assert_breakdown(&result, "pension_contribution_total", 109985);
    assert_breakdown(&result, "credit_used", 149800);

    assert_eq!(result["formatted"]["net_total"], "907 635 Ft");
    assert_eq!(result["formatted"]["pension_contribution_total"], "109 985 Ft");
}

#[tokio::test]
async fn test_reference_scenario_audit_trace() {
    let (_, result) = post_calculate(json!(InputSet::reference())).await;
    let steps = result["audit_trace"]["steps"].as_array().unwrap();

    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["rule_id"], "gross_pay");
    assert_eq!(steps[0]["output"]["gross_wages"], "533200");
    assert_eq!(steps[0]["output"]["gross_supplemental"], "159432");
    assert_eq!(steps[0]["output"]["gross_wage_base"], "692632");

    assert_eq!(steps[1]["rule_id"], "statutory_deductions");
    assert_eq!(steps[1]["output"]["income_tax"], "103895");
    assert_eq!(steps[1]["output"]["health_contribution"], "128137");
    assert_eq!(steps[1]["output"]["pension_contribution"], "69263");

    assert_eq!(steps[2]["rule_id"], "child_tax_credit");
    assert_eq!(steps[2]["output"]["used_against_income_tax"], "103895");
    assert_eq!(steps[2]["output"]["used_against_health_contribution"], "45905");

    assert_eq!(steps[5]["rule_id"], "net_total");
    assert_eq!(steps[5]["output"]["net_wages_after_credit"], "541137");
}

// =============================================================================
// Child tax credit
// =============================================================================

// Wage base 100000: income tax 15000, health 18500, pension 10000.

#[tokio::test]
async fn test_credit_fully_absorbed_by_income_tax() {
    let (_, result) = post_calculate(wage_request(1000, 100, 12000)).await;

    assert_breakdown(&result, "income_tax_total", 3000);
    assert_breakdown(&result, "health_contribution_total", 18500);
    assert_breakdown(&result, "credit_used", 12000);
}

#[tokio::test]
async fn test_credit_spills_into_health_contribution() {
    let (_, result) = post_calculate(wage_request(1000, 100, 30000)).await;

    assert_breakdown(&result, "income_tax_total", 0);
    assert_breakdown(&result, "health_contribution_total", 3500);
    assert_breakdown(&result, "credit_used", 30000);
}

#[tokio::test]
async fn test_credit_exceeding_both_deductions() {
    let (_, result) = post_calculate(wage_request(1000, 100, 40000)).await;

    assert_breakdown(&result, "income_tax_total", 0);
    assert_breakdown(&result, "health_contribution_total", 0);
    assert_breakdown(&result, "credit_used", 33500);
    assert_breakdown(&result, "net_total", 90000);
}

#[tokio::test]
async fn test_pension_unchanged_by_credit() {
    let (_, without_credit) = post_calculate(wage_request(1000, 100, 0)).await;
    let (_, with_credit) = post_calculate(wage_request(1000, 100, 40000)).await;

    assert_breakdown(&without_credit, "pension_contribution_total", 10000);
    assert_breakdown(&with_credit, "pension_contribution_total", 10000);
}

// =============================================================================
// Maternity benefit
// =============================================================================

#[tokio::test]
async fn test_taxable_maternity_benefit() {
    let (_, result) = post_calculate(json!({
        "maternity_benefit_gross": 100000,
        "maternity_benefit_taxable": true
    }))
    .await;

    assert_breakdown(&result, "net_maternity_benefit", 90000);
    assert_breakdown(&result, "pension_contribution_total", 10000);
    assert_breakdown(&result, "net_total", 90000);
}

#[tokio::test]
async fn test_exempt_maternity_benefit() {
    let (_, result) = post_calculate(json!({
        "maternity_benefit_gross": 100000,
        "maternity_benefit_taxable": false
    }))
    .await;

    assert_breakdown(&result, "net_maternity_benefit", 100000);
    assert_breakdown(&result, "pension_contribution_total", 0);
    assert_breakdown(&result, "net_total", 100000);
}

// =============================================================================
// Form input and consistency with the library
// =============================================================================

#[tokio::test]
async fn test_text_form_matches_numeric_request() {
    let form = json!({
        "hourly_wage": "2 950",
        "regular_hours": "120",
        "overtime_hours": "8",
        "leave_hours": "40",
        "leave_hourly_rate": "3 300",
        "variable_bonus": "99 864",
        "shift_premium": "59 568",
        "maternity_benefit_gross": "407 220 Ft",
        "child_tax_credit": "149 800",
        "maternity_benefit_taxable": true
    });
    let (status, result) = post_json(create_router_for_test(), "/calculate/text", form).await;

    assert_eq!(status, StatusCode::OK);
    assert_breakdown(&result, "net_total", 907635);
}

#[tokio::test]
async fn test_api_agrees_with_compute() {
    let inputs = InputSet {
        hourly_wage: 1875,
        regular_hours: 168,
        overtime_hours: 13,
        variable_bonus: 42017,
        maternity_benefit_gross: 33333,
        maternity_benefit_taxable: true,
        child_tax_credit: 66670,
        ..InputSet::default()
    };
    let expected = compute(&inputs);

    let (_, result) = post_calculate(json!(inputs)).await;

    assert_eq!(breakdown_field(&result, "net_total"), expected.net_total);
    assert_eq!(breakdown_field(&result, "credit_used"), expected.credit_used);
    assert_eq!(
        breakdown_field(&result, "health_contribution_total"),
        expected.health_contribution_total
    );
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (_, first) = post_calculate(json!(InputSet::reference())).await;
    let (_, second) = post_calculate(json!(InputSet::reference())).await;

    assert_eq!(first["breakdown"], second["breakdown"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_negative_hours_rejected() {
    let (status, error) = post_calculate(json!({ "regular_hours": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("regular_hours"));
}

#[tokio::test]
async fn test_fractional_amount_rejected() {
    let (status, error) = post_calculate(json!({ "hourly_wage": 12.5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_amount_above_maximum_rejected() {
    let (status, error) = post_calculate(json!({ "variable_bonus": 4294967296u64 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("variable_bonus"));
}

#[tokio::test]
async fn test_wrong_type_for_flag_rejected() {
    let (status, error) = post_calculate(json!({ "maternity_benefit_taxable": "yes" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MISSING_CONTENT_TYPE");
}
