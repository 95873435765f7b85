//! Flat-rate withholding (PPh 23) calculation functionality.
//!
//! This module provides functions for computing withholding tax on services
//! invoices at a flat rate, doubled for vendors without an NPWP, as per
//! Pasal 23 UU 36/2008.

use rust_decimal::Decimal;

use crate::models::{TaxCalculationResult, TaxType};

/// PPh 23 rate for NPWP-registered vendors (2%).
pub const PPH23_RATE_WITH_NPWP: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// PPh 23 rate for unregistered vendors (4%).
///
/// Per Pasal 23 ayat (1a) UU 36/2008 the rate is 100% higher without an
/// NPWP: the rate doubles, it is not an additive surcharge like PPh 21.
pub const PPH23_RATE_WITHOUT_NPWP: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Returns the PPh 23 rate as a fraction for the given registration status.
///
/// # Examples
///
/// ```
/// use pph_engine::calculation::pph23_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pph23_rate(true), Decimal::new(2, 2));
/// assert_eq!(pph23_rate(false), Decimal::new(4, 2));
/// ```
pub fn pph23_rate(has_npwp: bool) -> Decimal {
    if has_npwp {
        PPH23_RATE_WITH_NPWP
    } else {
        PPH23_RATE_WITHOUT_NPWP
    }
}

/// Calculates flat-rate PPh 23 withholding on a services invoice amount.
///
/// Unlike PPh 21, the full invoice amount is the taxable base and the rate
/// is flat: 2% for registered vendors, 4% for unregistered ones.
///
/// # Arguments
///
/// * `invoice_amount` - The invoice amount in IDR
/// * `has_npwp` - Whether the vendor holds an NPWP
///
/// # Returns
///
/// A [`TaxCalculationResult`] with:
/// - `dpp` equal to the full invoice amount
/// - `tax_rate` as a percentage number (`2` or `4`)
/// - `net_amount` equal to the amount minus the withheld tax
///
/// # Law Reference
///
/// - Pasal 23 ayat (1) huruf c: 2% on services
/// - Pasal 23 ayat (1a): doubled rate without NPWP
///
/// # Examples
///
/// ```
/// use pph_engine::calculation::calculate_pph23;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pph23(Decimal::new(1_000_000, 0), true);
///
/// assert_eq!(result.tax_rate, Decimal::new(2, 0));
/// assert_eq!(result.tax_amount, Decimal::new(20_000, 0));
/// assert_eq!(result.net_amount, Decimal::new(980_000, 0));
/// ```
pub fn calculate_pph23(invoice_amount: Decimal, has_npwp: bool) -> TaxCalculationResult {
    let rate = pph23_rate(has_npwp);
    let tax_amount = (invoice_amount * rate).normalize();

    TaxCalculationResult {
        gross_amount: invoice_amount.normalize(),
        dpp: invoice_amount.normalize(),
        tax_rate: (rate * Decimal::ONE_HUNDRED).normalize(),
        tax_amount,
        net_amount: (invoice_amount - tax_amount).normalize(),
        tax_type: TaxType::Pph23,
        has_npwp,
    }
}
