//! Core data models for the withholding tax engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bracket;
mod tax_result;
mod tax_type;

pub use bracket::{BracketRate, TaxBracket};
pub use tax_result::{Pph21Result, TaxCalculationResult};
pub use tax_type::{TaxMode, TaxType};
