//! Response types for the withholding tax engine API.
//!
//! This module defines the success envelope returned by the `/calculate`
//! endpoint and the error response structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{Pph21Result, TaxCalculationResult};

/// Response body for a successful `/calculate` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced this result.
    pub engine_version: String,
    /// The invoice this calculation settles.
    pub invoice_id: String,
    /// Label of the bracket table revision that was applied.
    pub rate_table: String,
    /// The taxpayer the withholding applies to.
    pub taxpayer: TaxpayerSummary,
    /// The invoice-level calculation result.
    pub result: TaxCalculationResult,
    /// Progressive bracket breakdown, present for PPh 21 invoices only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pph21: Option<Pph21Result>,
    /// Formatted rupiah amounts for display.
    pub display: DisplayAmounts,
}

/// Taxpayer details echoed back in a calculation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxpayerSummary {
    /// The taxpayer's display name, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The taxpayer's NPWP in canonical XX.XXX.XXX.X-XXX.XXX form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npwp: Option<String>,
    /// Whether the taxpayer holds an NPWP registration.
    pub has_npwp: bool,
}

/// Rupiah-formatted amounts for rendering on an invoice or payslip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayAmounts {
    /// The gross amount, e.g. `"Rp 100.000.000"`.
    pub gross_amount: String,
    /// The withheld tax amount.
    pub tax_amount: String,
    /// The net amount paid out.
    pub net_amount: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid NPWP error response.
    pub fn invalid_npwp(npwp: &str) -> Self {
        Self::with_details(
            "INVALID_NPWP",
            format!("Invalid NPWP: {}", npwp),
            format!("The NPWP '{}' must contain exactly 15 digits", npwp),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_NOT_FOUND",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_PARSE_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRateTable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RATE_TABLE",
                    "Rate table configuration is invalid",
                    message,
                ),
            },
            EngineError::RateTableNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_TABLE_NOT_FOUND",
                    format!("No rate table in force on date {}", date),
                    "The invoice date predates the earliest configured rate table revision",
                ),
            },
            EngineError::InvalidAmount { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount: {}", message),
                    "The invoice amount must be a non-negative number",
                ),
            },
            EngineError::InvalidNpwp { npwp } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_npwp(&npwp),
            },
        }
    }
}
