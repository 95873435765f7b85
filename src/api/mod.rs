//! HTTP API module for the withholding tax engine.
//!
//! This module provides the REST API endpoints for calculating Indonesian
//! withholding tax (PPh 21 and PPh 23) on freelance invoices.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculateRequest;
pub use response::{ApiError, TaxCalculationResponse};
pub use state::AppState;
