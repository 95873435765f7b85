//! Progressive income tax (PPh 21) calculation functionality.
//!
//! This module provides functions for computing Indonesian personal income
//! tax on freelance/services income, applying progressive marginal rates
//! across the Pasal 17 bracket table plus the surcharge for taxpayers
//! without an NPWP.

use rust_decimal::Decimal;

use crate::models::{BracketRate, Pph21Result, TaxBracket};

use super::surcharge::npwp_surcharge;

/// Fraction of gross services income that forms the taxable base.
///
/// Per PER-16/PJ/2016, freelance ("bukan pegawai") services income is taxed
/// on a deemed-profit base of 50% of gross.
pub const SERVICES_DPP_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns the statutory Pasal 17 progressive bracket table.
///
/// Rates per UU HPP 7/2021 (in force since 2022-01-01): five brackets from
/// 5% below IDR 60 million up to 35% above IDR 5 billion. The same values
/// ship as the `2022-01-01` revision in the rate configuration; this copy
/// serves callers that do not load configuration.
pub fn pasal_17_brackets() -> [BracketRate; 5] {
    [
        BracketRate {
            floor: Decimal::ZERO,
            ceiling: Some(Decimal::new(60_000_000, 0)),
            rate: Decimal::new(5, 2),
        },
        BracketRate {
            floor: Decimal::new(60_000_000, 0),
            ceiling: Some(Decimal::new(250_000_000, 0)),
            rate: Decimal::new(15, 2),
        },
        BracketRate {
            floor: Decimal::new(250_000_000, 0),
            ceiling: Some(Decimal::new(500_000_000, 0)),
            rate: Decimal::new(25, 2),
        },
        BracketRate {
            floor: Decimal::new(500_000_000, 0),
            ceiling: Some(Decimal::new(5_000_000_000, 0)),
            rate: Decimal::new(30, 2),
        },
        BracketRate {
            floor: Decimal::new(5_000_000_000, 0),
            ceiling: None,
            rate: Decimal::new(35, 2),
        },
    ]
}

/// Calculates progressive PPh 21 on gross freelance income using the
/// statutory bracket table.
///
/// # Arguments
///
/// * `gross_income` - The gross income in IDR
/// * `has_npwp` - Whether the taxpayer holds an NPWP
///
/// # Returns
///
/// A [`Pph21Result`] containing:
/// - `dpp`: The taxable base (half of gross income)
/// - `tax_brackets`: Per-bracket breakdown in ascending order
/// - `total_tax`: Total tax including any NPWP surcharge
/// - `net_income`: Gross income minus total tax
/// - `npwp_surcharge`: The 20% surcharge amount, zero when registered
///
/// # Law Reference
///
/// - Pasal 17 ayat (1) huruf a: progressive rate table
/// - Pasal 21 ayat (5a): 20% surcharge without NPWP
/// - PER-16/PJ/2016: 50% deemed-profit base for services income
///
/// # Examples
///
/// ## Income within the first bracket
///
/// ```
/// use pph_engine::calculation::calculate_pph21;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pph21(Decimal::new(100_000_000, 0), true);
///
/// assert_eq!(result.dpp, Decimal::new(50_000_000, 0));
/// assert_eq!(result.tax_brackets.len(), 1);
/// assert_eq!(result.total_tax, Decimal::new(2_500_000, 0));
/// assert_eq!(result.net_income, Decimal::new(97_500_000, 0));
/// ```
///
/// ## Income spanning three brackets
///
/// ```
/// use pph_engine::calculation::calculate_pph21;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pph21(Decimal::new(600_000_000, 0), true);
///
/// assert_eq!(result.dpp, Decimal::new(300_000_000, 0));
/// assert_eq!(result.tax_brackets.len(), 3);
/// assert_eq!(result.total_tax, Decimal::new(44_000_000, 0));
/// assert_eq!(result.net_income, Decimal::new(556_000_000, 0));
/// ```
///
/// ## Unregistered taxpayer
///
/// ```
/// use pph_engine::calculation::calculate_pph21;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pph21(Decimal::new(100_000_000, 0), false);
///
/// assert_eq!(result.npwp_surcharge, Decimal::new(500_000, 0));
/// assert_eq!(result.total_tax, Decimal::new(3_000_000, 0));
/// ```
pub fn calculate_pph21(gross_income: Decimal, has_npwp: bool) -> Pph21Result {
    calculate_pph21_with_table(gross_income, has_npwp, &pasal_17_brackets())
}

/// Calculates progressive PPh 21 over a caller-supplied bracket table.
///
/// Identical to [`calculate_pph21`] except the bracket table is a
/// parameter, allowing historical law revisions loaded from configuration
/// to be applied.
///
/// # Arguments
///
/// * `gross_income` - The gross income in IDR
/// * `has_npwp` - Whether the taxpayer holds an NPWP
/// * `brackets` - Progressive bracket table in ascending order
///
/// # Returns
///
/// A [`Pph21Result`] with the breakdown over the supplied table.
pub fn calculate_pph21_with_table(
    gross_income: Decimal,
    has_npwp: bool,
    brackets: &[BracketRate],
) -> Pph21Result {
    let dpp = (gross_income * SERVICES_DPP_RATIO).normalize();

    let mut remaining = dpp;
    let mut tax_brackets = Vec::new();
    let mut base_tax = Decimal::ZERO;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        // The unbounded top bracket absorbs everything left.
        let taxable_amount = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        if taxable_amount > Decimal::ZERO {
            let tax_amount = taxable_amount * bracket.rate;

            // Clamp the display ceiling to where the base actually ran out.
            let to = bracket
                .ceiling
                .map_or(dpp, |ceiling| ceiling.min(dpp));

            tax_brackets.push(TaxBracket {
                from: bracket.floor.normalize(),
                to: to.normalize(),
                rate: bracket.rate.normalize(),
                taxable_amount: taxable_amount.normalize(),
                tax_amount: tax_amount.normalize(),
            });

            base_tax += tax_amount;
            remaining -= taxable_amount;
        }
    }

    let npwp_surcharge = npwp_surcharge(base_tax, has_npwp);
    let total_tax = (base_tax + npwp_surcharge).normalize();

    Pph21Result {
        gross_income: gross_income.normalize(),
        dpp,
        tax_brackets,
        total_tax,
        net_income: (gross_income - total_tax).normalize(),
        npwp_surcharge: npwp_surcharge.normalize(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn idr(amount: i64) -> Decimal {
        Decimal::new(amount, 0)
    }

    // ==========================================================================
    // P21-001: 100M gross with NPWP - single bracket
    // ==========================================================================
    #[test]
    fn test_p21_001_100m_with_npwp_single_bracket() {
        let result = calculate_pph21(idr(100_000_000), true);

        assert_eq!(result.gross_income, idr(100_000_000));
        assert_eq!(result.dpp, idr(50_000_000));
        assert_eq!(result.total_tax, idr(2_500_000));
        assert_eq!(result.net_income, idr(97_500_000));
        assert_eq!(result.npwp_surcharge, Decimal::ZERO);

        assert_eq!(result.tax_brackets.len(), 1);
        let bracket = &result.tax_brackets[0];
        assert_eq!(bracket.from, Decimal::ZERO);
        assert_eq!(bracket.to, idr(50_000_000));
        assert_eq!(bracket.rate, dec("0.05"));
        assert_eq!(bracket.taxable_amount, idr(50_000_000));
        assert_eq!(bracket.tax_amount, idr(2_500_000));
    }

    // ==========================================================================
    // P21-002: 600M gross with NPWP - three brackets
    // ==========================================================================
    #[test]
    fn test_p21_002_600m_with_npwp_three_brackets() {
        let result = calculate_pph21(idr(600_000_000), true);

        assert_eq!(result.dpp, idr(300_000_000));
        assert_eq!(result.tax_brackets.len(), 3);

        let first = &result.tax_brackets[0];
        assert_eq!(first.from, Decimal::ZERO);
        assert_eq!(first.to, idr(60_000_000));
        assert_eq!(first.taxable_amount, idr(60_000_000));
        assert_eq!(first.tax_amount, idr(3_000_000));

        let second = &result.tax_brackets[1];
        assert_eq!(second.from, idr(60_000_000));
        assert_eq!(second.to, idr(250_000_000));
        assert_eq!(second.taxable_amount, idr(190_000_000));
        assert_eq!(second.tax_amount, idr(28_500_000));

        // The base runs out inside the third bracket, so its display
        // ceiling is the dpp rather than the statutory 500M.
        let third = &result.tax_brackets[2];
        assert_eq!(third.from, idr(250_000_000));
        assert_eq!(third.to, idr(300_000_000));
        assert_eq!(third.taxable_amount, idr(50_000_000));
        assert_eq!(third.tax_amount, idr(12_500_000));

        assert_eq!(result.total_tax, idr(44_000_000));
        assert_eq!(result.net_income, idr(556_000_000));
    }

    // ==========================================================================
    // P21-003: 100M gross without NPWP - 20% surcharge
    // ==========================================================================
    #[test]
    fn test_p21_003_100m_without_npwp_surcharge() {
        let result = calculate_pph21(idr(100_000_000), false);

        assert_eq!(result.npwp_surcharge, idr(500_000));
        assert_eq!(result.total_tax, idr(3_000_000));
        assert_eq!(result.net_income, idr(97_000_000));

        // The bracket rows themselves carry no surcharge.
        assert_eq!(result.tax_brackets[0].tax_amount, idr(2_500_000));
    }

    // ==========================================================================
    // P21-004: zero gross income
    // ==========================================================================
    #[test]
    fn test_p21_004_zero_gross_income() {
        let result = calculate_pph21(Decimal::ZERO, true);

        assert_eq!(result.dpp, Decimal::ZERO);
        assert!(result.tax_brackets.is_empty());
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.net_income, Decimal::ZERO);
        assert_eq!(result.npwp_surcharge, Decimal::ZERO);
    }

    // ==========================================================================
    // P21-005: negative gross income degenerates without panicking
    // ==========================================================================
    #[test]
    fn test_p21_005_negative_gross_income_degenerates() {
        let result = calculate_pph21(idr(-10_000_000), true);

        assert!(result.tax_brackets.is_empty());
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.net_income, idr(-10_000_000));
    }

    // ==========================================================================
    // P21-006: dpp exactly at the first bracket ceiling
    // ==========================================================================
    #[test]
    fn test_p21_006_dpp_at_first_ceiling() {
        // gross 120M gives dpp exactly 60M
        let result = calculate_pph21(idr(120_000_000), true);

        assert_eq!(result.dpp, idr(60_000_000));
        assert_eq!(result.tax_brackets.len(), 1);
        assert_eq!(result.tax_brackets[0].to, idr(60_000_000));
        assert_eq!(result.total_tax, idr(3_000_000));
    }

    // ==========================================================================
    // P21-007: dpp just over the first bracket ceiling
    // ==========================================================================
    #[test]
    fn test_p21_007_dpp_just_over_first_ceiling() {
        // gross 120M + 2 gives dpp 60,000,001
        let result = calculate_pph21(idr(120_000_002), true);

        assert_eq!(result.dpp, idr(60_000_001));
        assert_eq!(result.tax_brackets.len(), 2);
        assert_eq!(result.tax_brackets[1].taxable_amount, idr(1));
        assert_eq!(result.tax_brackets[1].tax_amount, dec("0.15"));
        assert_eq!(result.tax_brackets[1].to, idr(60_000_001));
        assert_eq!(result.total_tax, dec("3000000.15"));
    }

    // ==========================================================================
    // P21-008: income spanning all five brackets
    // ==========================================================================
    #[test]
    fn test_p21_008_income_spanning_all_brackets() {
        // gross 12B gives dpp 6B, past the 5B floor of the top bracket
        let result = calculate_pph21(idr(12_000_000_000), true);

        assert_eq!(result.dpp, idr(6_000_000_000));
        assert_eq!(result.tax_brackets.len(), 5);

        assert_eq!(result.tax_brackets[0].tax_amount, idr(3_000_000));
        assert_eq!(result.tax_brackets[1].tax_amount, idr(28_500_000));
        assert_eq!(result.tax_brackets[2].tax_amount, idr(62_500_000));
        assert_eq!(result.tax_brackets[3].tax_amount, idr(1_350_000_000));

        // Top bracket takes the remaining 1B at 35%, displayed up to dpp.
        let top = &result.tax_brackets[4];
        assert_eq!(top.from, idr(5_000_000_000));
        assert_eq!(top.to, idr(6_000_000_000));
        assert_eq!(top.taxable_amount, idr(1_000_000_000));
        assert_eq!(top.tax_amount, idr(350_000_000));

        assert_eq!(result.total_tax, idr(1_794_000_000));
        assert_eq!(result.net_income, idr(10_206_000_000));
    }

    // ==========================================================================
    // P21-009: taxable amounts across brackets sum to the dpp
    // ==========================================================================
    #[test]
    fn test_p21_009_taxable_amounts_sum_to_dpp() {
        for gross in [
            idr(0),
            idr(1),
            idr(100_000_000),
            idr(600_000_000),
            idr(1_500_000_000),
            idr(12_000_000_000),
        ] {
            let result = calculate_pph21(gross, true);
            let covered: Decimal = result
                .tax_brackets
                .iter()
                .map(|bracket| bracket.taxable_amount)
                .sum();
            assert_eq!(covered, result.dpp, "gross {gross}");
        }
    }

    // ==========================================================================
    // P21-010: odd gross produces an exact fractional dpp
    // ==========================================================================
    #[test]
    fn test_p21_010_odd_gross_fractional_dpp() {
        let result = calculate_pph21(idr(1_000_001), true);

        assert_eq!(result.dpp, dec("500000.5"));
        assert_eq!(result.total_tax, dec("25000.025"));
        assert_eq!(result.net_income, dec("975000.975"));
        assert_eq!(result.net_income + result.total_tax, idr(1_000_001));
    }

    // ==========================================================================
    // P21-011: surcharge is exactly 20% of the base tax
    // ==========================================================================
    #[test]
    fn test_p21_011_surcharge_is_exact_multiple() {
        for gross in [idr(50_000_000), idr(600_000_000), idr(12_000_000_000)] {
            let with = calculate_pph21(gross, true);
            let without = calculate_pph21(gross, false);

            assert_eq!(without.total_tax, with.total_tax * dec("1.2"));
            assert_eq!(without.npwp_surcharge, with.total_tax * dec("0.2"));
        }
    }

    // ==========================================================================
    // P21-012: custom bracket table
    // ==========================================================================
    #[test]
    fn test_p21_012_custom_bracket_table() {
        // The pre-2022 UU 36/2008 table: 50M first ceiling, four brackets.
        let table = [
            BracketRate {
                floor: Decimal::ZERO,
                ceiling: Some(idr(50_000_000)),
                rate: dec("0.05"),
            },
            BracketRate {
                floor: idr(50_000_000),
                ceiling: Some(idr(250_000_000)),
                rate: dec("0.15"),
            },
            BracketRate {
                floor: idr(250_000_000),
                ceiling: Some(idr(500_000_000)),
                rate: dec("0.25"),
            },
            BracketRate {
                floor: idr(500_000_000),
                ceiling: None,
                rate: dec("0.30"),
            },
        ];

        // gross 600M gives dpp 300M: 2.5M + 30M + 12.5M
        let result = calculate_pph21_with_table(idr(600_000_000), true, &table);

        assert_eq!(result.tax_brackets.len(), 3);
        assert_eq!(result.tax_brackets[0].tax_amount, idr(2_500_000));
        assert_eq!(result.tax_brackets[1].tax_amount, idr(30_000_000));
        assert_eq!(result.tax_brackets[2].tax_amount, idr(12_500_000));
        assert_eq!(result.total_tax, idr(45_000_000));
        assert_eq!(result.net_income, idr(555_000_000));
    }

    // ==========================================================================
    // P21-013: statutory table shape
    // ==========================================================================
    #[test]
    fn test_p21_013_statutory_table_shape() {
        let table = pasal_17_brackets();

        assert_eq!(table.len(), 5);
        assert_eq!(table[0].floor, Decimal::ZERO);
        assert_eq!(table[0].ceiling, Some(idr(60_000_000)));
        assert_eq!(table[4].floor, idr(5_000_000_000));
        assert_eq!(table[4].ceiling, None);

        // Contiguous: each floor equals the previous ceiling.
        for pair in table.windows(2) {
            assert_eq!(pair[1].floor, pair[0].ceiling.unwrap());
        }

        let rates: Vec<Decimal> = table.iter().map(|bracket| bracket.rate).collect();
        assert_eq!(
            rates,
            vec![
                dec("0.05"),
                dec("0.15"),
                dec("0.25"),
                dec("0.30"),
                dec("0.35")
            ]
        );
    }

    #[test]
    fn test_dpp_ratio_constant() {
        assert_eq!(SERVICES_DPP_RATIO, dec("0.5"));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate_pph21(idr(100_000_000), true);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"total_tax\":\"2500000\""));
        assert!(json.contains("\"dpp\":\"50000000\""));

        let deserialized: Pph21Result = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, result);
    }
}
