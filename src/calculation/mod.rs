//! Calculation logic for the withholding tax engine.
//!
//! This module contains all the calculation functions for determining
//! withholding amounts, including the progressive PPh 21 bracket walk, the
//! NPWP surcharge, flat-rate PPh 23 withholding, and the invoice-level
//! orchestrator that selects the regime and include/exclude semantics.

mod invoice_tax;
mod pph21;
mod pph23;
mod surcharge;

pub use invoice_tax::{calculate_invoice_tax, calculate_invoice_tax_with_table};
pub use pph21::{
    SERVICES_DPP_RATIO, calculate_pph21, calculate_pph21_with_table, pasal_17_brackets,
};
pub use pph23::{
    PPH23_RATE_WITH_NPWP, PPH23_RATE_WITHOUT_NPWP, calculate_pph23, pph23_rate,
};
pub use surcharge::{NPWP_SURCHARGE_RATE, npwp_surcharge};
