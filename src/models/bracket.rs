//! Progressive bracket types.
//!
//! This module defines the two bracket shapes used by the engine: the
//! statutory rate-table row (BracketRate) that calculations walk over, and
//! the per-calculation breakdown row (TaxBracket) emitted for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a statutory progressive rate table.
///
/// Rows cover contiguous, ascending income ranges. The final row of a table
/// has `ceiling: None` and applies its rate to everything above `floor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRate {
    /// Lower bound of the bracket (inclusive), in IDR.
    pub floor: Decimal,
    /// Upper bound of the bracket (exclusive), in IDR. `None` marks the
    /// unbounded top bracket.
    pub ceiling: Option<Decimal>,
    /// Marginal rate applied to the portion of the base falling in this
    /// bracket, as a fraction (e.g. `0.05`).
    pub rate: Decimal,
}

impl BracketRate {
    /// Returns the width of the bracket, or `None` for the unbounded
    /// top bracket.
    pub fn width(&self) -> Option<Decimal> {
        self.ceiling.map(|ceiling| ceiling - self.floor)
    }
}

/// The portion of a taxable base falling in one progressive bracket and the
/// tax owed on that portion.
///
/// Emitted in ascending order by [`calculate_pph21`]. The `to` bound is
/// clamped to the taxable base for display, so the last row of a breakdown
/// shows where the base ran out rather than the statutory ceiling.
///
/// [`calculate_pph21`]: crate::calculation::calculate_pph21
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket, in IDR.
    pub from: Decimal,
    /// Display upper bound: the statutory ceiling clamped to the taxable
    /// base, in IDR.
    pub to: Decimal,
    /// Marginal rate applied in this bracket, as a fraction.
    pub rate: Decimal,
    /// The portion of the taxable base that fell in this bracket, in IDR.
    pub taxable_amount: Decimal,
    /// Tax owed on that portion: `taxable_amount * rate`, in IDR.
    pub tax_amount: Decimal,
}
