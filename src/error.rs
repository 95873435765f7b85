//! Error types for the withholding tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate configuration
//! or validating calculation requests. The calculation functions themselves
//! are total and never return errors.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the withholding tax engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pph_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rate table failed statutory-shape validation when loaded.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// No rate table revision is effective on the requested date.
    #[error("No rate table in force on date {date}")]
    RateTableNotFound {
        /// The date for which a rate table was requested.
        date: NaiveDate,
    },

    /// An invoice amount was invalid.
    #[error("Invalid amount: {message}")]
    InvalidAmount {
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A supplied NPWP did not contain exactly 15 digits.
    #[error("Invalid NPWP '{npwp}': must contain exactly 15 digits")]
    InvalidNpwp {
        /// The NPWP value that failed validation.
        npwp: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
