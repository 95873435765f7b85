//! HTTP request handlers for the withholding tax engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_invoice_tax_with_table, calculate_pph21_with_table};
use crate::config::RateTable;
use crate::error::EngineError;
use crate::format::{format_idr, format_npwp, validate_npwp};
use crate::models::TaxType;

use super::request::CalculateRequest;
use super::response::{
    ApiError, ApiErrorResponse, DisplayAmounts, TaxCalculationResponse, TaxpayerSummary,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts an invoice calculation request and returns the withholding result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
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
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Reject negative invoice amounts before they reach the engine
    if request.invoice.amount < Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            invoice_id = %request.invoice.id,
            amount = %request.invoice.amount,
            "Negative invoice amount"
        );
        let api_error: ApiErrorResponse = EngineError::InvalidAmount {
            message: format!(
                "invoice amount must not be negative, got {}",
                request.invoice.amount
            ),
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Validate the NPWP when one is supplied
    if let Some(npwp) = &request.taxpayer.npwp {
        if !validate_npwp(npwp) {
            warn!(
                correlation_id = %correlation_id,
                invoice_id = %request.invoice.id,
                "Invalid NPWP"
            );
            let api_error: ApiErrorResponse =
                EngineError::InvalidNpwp { npwp: npwp.clone() }.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    }

    // Select the bracket table revision in force on the invoice date
    let config = state.config();
    let invoice_date = request
        .invoice
        .invoice_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let table = match config.table_for(invoice_date) {
        Ok(table) => table,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                invoice_date = %invoice_date,
                error = %err,
                "No rate table for invoice date"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let response = perform_calculation(&request, table);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        invoice_id = %response.invoice_id,
        tax_type = %request.invoice.tax_type,
        tax_amount = %response.result.tax_amount,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Builds the response envelope for a validated calculation request.
fn perform_calculation(request: &CalculateRequest, table: &RateTable) -> TaxCalculationResponse {
    let has_npwp = request.taxpayer.npwp.is_some();
    let amount = request.invoice.amount;

    let result = calculate_invoice_tax_with_table(
        amount,
        request.invoice.tax_type,
        request.invoice.mode,
        has_npwp,
        &table.brackets,
    );

    // The bracket-by-bracket breakdown only exists for progressive withholding
    let pph21 = (request.invoice.tax_type == TaxType::Pph21)
        .then(|| calculate_pph21_with_table(amount, has_npwp, &table.brackets));

    let display = DisplayAmounts {
        gross_amount: format_idr(result.gross_amount),
        tax_amount: format_idr(result.tax_amount),
        net_amount: format_idr(result.net_amount),
    };

    TaxCalculationResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        invoice_id: request.invoice.id.clone(),
        rate_table: table.label.clone(),
        taxpayer: TaxpayerSummary {
            name: request.taxpayer.name.clone(),
            npwp: request.taxpayer.npwp.as_deref().map(format_npwp),
            has_npwp,
        },
        result,
        pph21,
        display,
    }
}
