//! Withholding Tax Engine for Indonesian Freelance Invoices
//!
//! This crate provides functionality for calculating Indonesian income tax
//! withholding on freelance invoices: progressive PPh 21 for personal
//! services, flat-rate PPh 23 for royalties and rent, rupiah and NPWP
//! formatting helpers, and an HTTP API for invoice settlement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
