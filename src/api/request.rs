//! Request types for the withholding tax engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{TaxMode, TaxType};

/// Request body for the `/calculate` endpoint.
///
/// Contains the invoice being settled and the taxpayer (vendor) the
/// payment is going to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The invoice to calculate withholding for.
    pub invoice: InvoiceRequest,
    /// The taxpayer receiving the invoice payment.
    #[serde(default)]
    pub taxpayer: TaxpayerRequest,
}

/// Invoice information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Unique identifier for the invoice.
    pub id: String,
    /// The invoice amount in rupiah.
    pub amount: Decimal,
    /// Which withholding article applies to this invoice.
    pub tax_type: TaxType,
    /// Whether the amount already includes the tax or excludes it.
    pub mode: TaxMode,
    /// The invoice date, used to select the bracket table revision in
    /// force. Defaults to today when omitted.
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
}

/// Taxpayer information in a calculation request.
///
/// Both fields are optional: an invoice addressed to an unregistered
/// vendor simply omits the NPWP, which triggers the higher withholding
/// rates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxpayerRequest {
    /// The taxpayer's display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The taxpayer's NPWP registration number, if they have one.
    #[serde(default)]
    pub npwp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_calculate_request() {
        let json = r#"{
            "invoice": {
                "id": "INV-2026-0042",
                "amount": "100000000",
                "tax_type": "pph21",
                "mode": "exclude",
                "invoice_date": "2026-03-15"
            },
            "taxpayer": {
                "name": "Budi Santoso",
                "npwp": "12.345.678.9-012.345"
            }
        }"#;

        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.invoice.id, "INV-2026-0042");
        assert_eq!(request.invoice.amount, Decimal::from_str("100000000").unwrap());
        assert_eq!(request.invoice.tax_type, TaxType::Pph21);
        assert_eq!(request.invoice.mode, TaxMode::Exclude);
        assert_eq!(request.taxpayer.npwp.as_deref(), Some("12.345.678.9-012.345"));
    }

    #[test]
    fn test_deserialize_minimal_request_defaults() {
        // No taxpayer block and no invoice_date: both default.
        let json = r#"{
            "invoice": {
                "id": "INV-2026-0001",
                "amount": "5000000",
                "tax_type": "pph23",
                "mode": "include"
            }
        }"#;

        let request: CalculateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.invoice.invoice_date, None);
        assert_eq!(request.taxpayer.name, None);
        assert_eq!(request.taxpayer.npwp, None);
    }

    #[test]
    fn test_deserialize_unknown_tax_type_rejected() {
        let json = r#"{
            "invoice": {
                "id": "INV-2026-0002",
                "amount": "5000000",
                "tax_type": "pph26",
                "mode": "include"
            }
        }"#;

        let result: Result<CalculateRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
