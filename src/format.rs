//! Display formatting and validation helpers.
//!
//! This module provides Indonesian Rupiah display formatting and NPWP
//! (taxpayer identification number) validation and formatting used by
//! invoice forms and the API layer.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Formatter, Money, Params, Position, define_currency_set};

define_currency_set!(
    currencies {
        IDR: {
            code: "IDR",
            exponent: 0,
            locale: EnEu,
            minor_units: 1,
            name: "Indonesian Rupiah",
            symbol: "Rp",
            symbol_first: true,
        }
    }
);

/// Number of digits in a well-formed NPWP.
const NPWP_DIGITS: usize = 15;

/// Formats an amount as an Indonesian Rupiah display string.
///
/// Rupiah has no sub-unit, so the amount is rounded half-away-from-zero to
/// whole rupiah and rendered with `.` as the thousands separator and no
/// fractional digits.
///
/// # Examples
///
/// ```
/// use pph_engine::format::format_idr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_idr(Decimal::new(1_500_000, 0)), "Rp 1.500.000");
/// assert_eq!(format_idr(Decimal::ZERO), "Rp 0");
/// ```
pub fn format_idr(amount: Decimal) -> String {
    let whole_rupiah = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let money = Money::from_decimal(whole_rupiah, currencies::IDR);

    let params = Params {
        digit_separator: '.',
        exponent_separator: ',',
        symbol: Some("Rp"),
        positions: vec![
            Position::Sign,
            Position::Symbol,
            Position::Space,
            Position::Amount,
        ],
        ..Default::default()
    };
    Formatter::money(&money, params)
}

/// Returns true if the input contains exactly 15 digits once every
/// non-digit character is stripped.
///
/// Accepts both raw digit strings and display-formatted NPWPs.
///
/// # Examples
///
/// ```
/// use pph_engine::format::validate_npwp;
///
/// assert!(validate_npwp("12.345.678.9-012.345"));
/// assert!(validate_npwp("123456789012345"));
/// assert!(!validate_npwp("123"));
/// ```
pub fn validate_npwp(npwp: &str) -> bool {
    npwp.chars().filter(|c| c.is_ascii_digit()).count() == NPWP_DIGITS
}

/// Formats an NPWP into its display form `XX.XXX.XXX.X-XXX.XXX`.
///
/// Inputs whose digit count is not exactly 15 are returned unchanged, so
/// the function is safe to apply to arbitrary user input.
///
/// # Examples
///
/// ```
/// use pph_engine::format::format_npwp;
///
/// assert_eq!(format_npwp("123456789012345"), "12.345.678.9-012.345");
/// assert_eq!(format_npwp("123"), "123");
/// ```
pub fn format_npwp(npwp: &str) -> String {
    let digits: String = npwp.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != NPWP_DIGITS {
        return npwp.to_string();
    }

    format!(
        "{}.{}.{}.{}-{}.{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..9],
        &digits[9..12],
        &digits[12..15]
    )
}
