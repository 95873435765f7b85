//! Calculation result models.
//!
//! This module defines the result structures returned by the tax
//! calculation functions: the detailed progressive breakdown for PPh 21 and
//! the regime-independent invoice-level result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bracket::TaxBracket;
use super::tax_type::TaxType;

/// The result of a progressive PPh 21 calculation.
///
/// Carries the full bracket breakdown so callers can render how the total
/// was reached. Two identities hold for every result:
/// `net_income = gross_income - total_tax` and
/// `total_tax = sum of bracket tax_amounts + npwp_surcharge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pph21Result {
    /// The gross income the calculation was run on, in IDR.
    pub gross_income: Decimal,
    /// Dasar Pengenaan Pajak: the taxable base, half of gross income under
    /// the services deemed-profit rule. Derived, never supplied.
    pub dpp: Decimal,
    /// Per-bracket breakdown in ascending bracket order. Empty when the
    /// taxable base is zero.
    pub tax_brackets: Vec<TaxBracket>,
    /// Total tax owed including any NPWP surcharge, in IDR.
    pub total_tax: Decimal,
    /// What the taxpayer keeps: `gross_income - total_tax`, in IDR.
    pub net_income: Decimal,
    /// The 20% surcharge applied when the taxpayer has no NPWP; zero
    /// otherwise, in IDR.
    pub npwp_surcharge: Decimal,
}

impl Pph21Result {
    /// Returns the effective tax rate as a percentage of gross income.
    ///
    /// A zero gross income yields a rate of `0` rather than dividing
    /// by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pph_engine::calculation::calculate_pph21;
    /// use rust_decimal::Decimal;
    ///
    /// let result = calculate_pph21(Decimal::new(100_000_000, 0), true);
    /// assert_eq!(result.effective_rate_percent(), Decimal::new(25, 1)); // 2.5%
    /// ```
    pub fn effective_rate_percent(&self) -> Decimal {
        self.total_tax
            .checked_div(self.gross_income)
            .map_or(Decimal::ZERO, |fraction| {
                (fraction * Decimal::ONE_HUNDRED).normalize()
            })
    }
}

/// The result of an invoice-level tax calculation, for any regime.
///
/// For `pph23` and `none` the `tax_rate` is the flat percentage applied; for
/// `pph21` it is the effective percentage `total_tax / amount * 100`, which
/// varies with the amount because the brackets are progressive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// What the payer is billed, in IDR. Equals the input amount except in
    /// PPh 23 exclude mode, where the tax is added on top.
    pub gross_amount: Decimal,
    /// The taxable base the rate was applied to, in IDR. The full amount
    /// for PPh 23, half of it for PPh 21.
    pub dpp: Decimal,
    /// The applied rate as a percentage number (`2` means 2%), flat or
    /// effective depending on the regime.
    pub tax_rate: Decimal,
    /// Tax withheld, in IDR.
    pub tax_amount: Decimal,
    /// What the recipient keeps, in IDR.
    pub net_amount: Decimal,
    /// The withholding regime this result was computed under.
    pub tax_type: TaxType,
    /// Whether the taxpayer was treated as NPWP-registered. Always `true`
    /// for `tax_type: none`.
    pub has_npwp: bool,
}
