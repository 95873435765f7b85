//! Invoice-level tax orchestration.
//!
//! This module provides the single entry point used by invoice forms: it
//! selects the withholding regime and applies include/exclude semantics to
//! the invoice amount, delegating to the regime-specific calculations.

use rust_decimal::Decimal;

use crate::models::{BracketRate, TaxCalculationResult, TaxMode, TaxType};

use super::pph21::{calculate_pph21_with_table, pasal_17_brackets};
use super::pph23::{calculate_pph23, pph23_rate};

/// Calculates invoice-level tax using the statutory PPh 21 bracket table.
///
/// # Arguments
///
/// * `amount` - The invoice amount in IDR
/// * `tax_type` - The withholding regime to apply
/// * `mode` - Whether tax is embedded in the amount or added on top
/// * `has_npwp` - Whether the recipient holds an NPWP
///
/// # Returns
///
/// A [`TaxCalculationResult`]. The branching contract:
///
/// - `none`: pass-through. Gross, base, and net all equal the amount, the
///   rate and tax are zero, and `has_npwp` is reported as `true` regardless
///   of the input.
/// - `pph23` in `include` mode: the tax is already embedded. The gross stays
///   at the amount and the net is the amount minus tax.
/// - `pph23` in `exclude` mode: the tax is billed on top. The gross is the
///   amount plus tax and the net stays at the amount.
/// - `pph21`: the amount is always treated as gross income; the
///   include/exclude mode does not apply to this regime and is ignored. The
///   `tax_rate` is the effective percentage `total_tax / amount * 100`, `0`
///   when the amount is zero.
///
/// # Examples
///
/// ## PPh 23 billed on top
///
/// ```
/// use pph_engine::calculation::calculate_invoice_tax;
/// use pph_engine::models::{TaxMode, TaxType};
/// use rust_decimal::Decimal;
///
/// let result = calculate_invoice_tax(
///     Decimal::new(1_000_000, 0),
///     TaxType::Pph23,
///     TaxMode::Exclude,
///     true,
/// );
///
/// assert_eq!(result.gross_amount, Decimal::new(1_020_000, 0));
/// assert_eq!(result.tax_amount, Decimal::new(20_000, 0));
/// assert_eq!(result.net_amount, Decimal::new(1_000_000, 0));
/// ```
///
/// ## PPh 21 on a freelance invoice
///
/// ```
/// use pph_engine::calculation::calculate_invoice_tax;
/// use pph_engine::models::{TaxMode, TaxType};
/// use rust_decimal::Decimal;
///
/// let result = calculate_invoice_tax(
///     Decimal::new(100_000_000, 0),
///     TaxType::Pph21,
///     TaxMode::Exclude,
///     true,
/// );
///
/// assert_eq!(result.tax_amount, Decimal::new(2_500_000, 0));
/// assert_eq!(result.tax_rate, Decimal::new(25, 1)); // effective 2.5%
/// ```
pub fn calculate_invoice_tax(
    amount: Decimal,
    tax_type: TaxType,
    mode: TaxMode,
    has_npwp: bool,
) -> TaxCalculationResult {
    calculate_invoice_tax_with_table(amount, tax_type, mode, has_npwp, &pasal_17_brackets())
}

/// Calculates invoice-level tax over a caller-supplied PPh 21 bracket table.
///
/// Identical to [`calculate_invoice_tax`] except the progressive table is a
/// parameter. Only the `pph21` branch consults the table; `pph23` and `none`
/// are unaffected by it.
pub fn calculate_invoice_tax_with_table(
    amount: Decimal,
    tax_type: TaxType,
    mode: TaxMode,
    has_npwp: bool,
    brackets: &[BracketRate],
) -> TaxCalculationResult {
    match tax_type {
        TaxType::None => TaxCalculationResult {
            gross_amount: amount.normalize(),
            dpp: amount.normalize(),
            tax_rate: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            net_amount: amount.normalize(),
            tax_type: TaxType::None,
            // Pass-through results always report a registered taxpayer.
            has_npwp: true,
        },
        TaxType::Pph23 => match mode {
            TaxMode::Include => calculate_pph23(amount, has_npwp),
            TaxMode::Exclude => {
                let rate = pph23_rate(has_npwp);
                let tax_amount = (amount * rate).normalize();

                TaxCalculationResult {
                    gross_amount: (amount + tax_amount).normalize(),
                    dpp: amount.normalize(),
                    tax_rate: (rate * Decimal::ONE_HUNDRED).normalize(),
                    tax_amount,
                    net_amount: amount.normalize(),
                    tax_type: TaxType::Pph23,
                    has_npwp,
                }
            }
        },
        TaxType::Pph21 => {
            // Mode does not apply here: the amount is always gross income.
            let pph21 = calculate_pph21_with_table(amount, has_npwp, brackets);

            TaxCalculationResult {
                gross_amount: pph21.gross_income,
                dpp: pph21.dpp,
                tax_rate: pph21.effective_rate_percent(),
                tax_amount: pph21.total_tax,
                net_amount: pph21.net_income,
                tax_type: TaxType::Pph21,
                has_npwp,
            }
        }
    }
}
