//! HTTP request handlers for the Personal Income Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_tax, calculate_total_income, compute_deductions};
use crate::config::TaxYearRates;
use crate::models::{FamilyProfile, FundInputs, IncomeInputs, InsuranceInputs, TaxResult};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deductions", post(deductions_handler))
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for the POST /deductions endpoint.
///
/// Recomputes the three deduction categories from the current wizard
/// fields; the wizard calls it whenever a deduction input changes.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let rules = match resolve_rules(&state, request.tax_year, correlation_id) {
        Ok(rules) => rules,
        Err(response) => return response.into_response(),
    };

    let income: IncomeInputs = request.income.into();
    let family: FamilyProfile = request.family.into();
    let insurance: InsuranceInputs = request.insurance.into();
    let funds: FundInputs = request.funds.into();

    let breakdown = compute_deductions(&income, &family, &insurance, &funds, rules);
    let totals = breakdown.totals();

    info!(
        correlation_id = %correlation_id,
        tax_year = breakdown.tax_year,
        family = %totals.family,
        insurance = %totals.insurance,
        fund = %totals.fund,
        "Deductions computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(breakdown),
    )
        .into_response()
}

/// Handler for the POST /calculate endpoint.
///
/// Runs the full calculation the wizard triggers on reaching its final
/// step: aggregate income, compute the deduction totals, walk the bracket
/// table and return the assessment.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let rules = match resolve_rules(&state, request.tax_year, correlation_id) {
        Ok(rules) => rules,
        Err(response) => return response.into_response(),
    };

    let income: IncomeInputs = request.income.into();
    let family: FamilyProfile = request.family.into();
    let insurance: InsuranceInputs = request.insurance.into();
    let funds: FundInputs = request.funds.into();

    let start_time = Instant::now();

    let total_income = calculate_total_income(&income);
    let deductions = compute_deductions(&income, &family, &insurance, &funds, rules).totals();
    let assessment = calculate_tax(total_income, &deductions, &rules.brackets);

    let result = TaxResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: rules.tax_year,
        total_income: assessment.total_income,
        deductions,
        taxable_income: assessment.taxable_income,
        tax: assessment.tax,
        net_income: assessment.net_income,
        breakdown: assessment.breakdown,
    };

    info!(
        correlation_id = %correlation_id,
        tax_year = result.tax_year,
        total_income = %result.total_income,
        taxable_income = %result.taxable_income,
        tax = %result.tax,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Turns a JSON extraction result into a request, mapping rejections to
/// structured errors.
fn parse_request(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationRequest, ApiError> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // Get the body text which contains the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                ApiError::malformed_json(body_text)
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

/// Resolves the rule set for the requested tax year, defaulting to the
/// latest configured year.
fn resolve_rules(
    state: &AppState,
    tax_year: Option<i32>,
    correlation_id: Uuid,
) -> Result<&TaxYearRates, ApiErrorResponse> {
    match tax_year {
        Some(year) => state.config().year(year).map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                tax_year = year,
                "Tax year not configured"
            );
            ApiErrorResponse::from(err)
        }),
        None => Ok(state.config().latest()),
    }
}
