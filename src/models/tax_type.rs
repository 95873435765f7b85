//! Tax regime and invoice mode enums.
//!
//! This module defines the TaxType and TaxMode enums that select which
//! withholding regime applies to an invoice and whether the tax is embedded
//! in or added on top of the invoice amount. Both are closed enums, so
//! invalid regime or mode strings are rejected at deserialization and never
//! reach the calculation functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The withholding regime applied to an invoice amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxType {
    /// Progressive personal income tax on freelance/services income
    /// (Pasal 17 brackets over a deemed-profit base).
    Pph21,
    /// Flat-rate withholding on services payments to vendors.
    Pph23,
    /// No withholding; the invoice amount passes through unchanged.
    None,
}

impl TaxType {
    /// Returns the wire representation of the tax type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxType::Pph21 => "pph21",
            TaxType::Pph23 => "pph23",
            TaxType::None => "none",
        }
    }
}

impl fmt::Display for TaxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the invoice amount already embeds the tax or the tax is billed
/// on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// Tax is embedded in the amount; the net the recipient keeps is
    /// the amount minus tax.
    Include,
    /// Tax is added on top; the gross the payer is billed is the amount
    /// plus tax.
    Exclude,
}

impl TaxMode {
    /// Returns the wire representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxMode::Include => "include",
            TaxMode::Exclude => "exclude",
        }
    }
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
