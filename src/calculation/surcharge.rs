//! NPWP surcharge calculation functionality.
//!
//! This module provides the surcharge applied to PPh 21 liabilities of
//! taxpayers who do not hold an NPWP, as per Pasal 21 ayat (5a) UU 36/2008.

use rust_decimal::Decimal;

/// Surcharge rate applied to the base PPh 21 liability when the taxpayer
/// has no NPWP.
///
/// Per Pasal 21 ayat (5a), the withheld amount is 20% higher for
/// unregistered taxpayers. The surcharge is additive on top of the base
/// tax, unlike the PPh 23 treatment which doubles the rate outright.
pub const NPWP_SURCHARGE_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Computes the NPWP surcharge on a base PPh 21 liability.
///
/// Returns zero for registered taxpayers and `base_tax * 0.2` for
/// unregistered ones. The caller adds the surcharge to the base liability.
///
/// # Arguments
///
/// * `base_tax` - The PPh 21 liability before any surcharge
/// * `has_npwp` - Whether the taxpayer holds an NPWP
///
/// # Law Reference
///
/// Pasal 21 ayat (5a) UU 36/2008 specifies the 20% surcharge.
///
/// # Examples
///
/// ```
/// use pph_engine::calculation::npwp_surcharge;
/// use rust_decimal::Decimal;
///
/// let base_tax = Decimal::new(2_500_000, 0);
///
/// assert_eq!(npwp_surcharge(base_tax, true), Decimal::ZERO);
/// assert_eq!(npwp_surcharge(base_tax, false), Decimal::new(500_000, 0));
/// ```
pub fn npwp_surcharge(base_tax: Decimal, has_npwp: bool) -> Decimal {
    if has_npwp {
        Decimal::ZERO
    } else {
        (base_tax * NPWP_SURCHARGE_RATE).normalize()
    }
}
