//! Configuration loading and management for the withholding tax engine.
//!
//! This module provides functionality to load statutory rate configuration
//! from YAML files: tax metadata plus one progressive bracket table per law
//! revision, keyed by effective date.
//!
//! # Example
//!
//! ```no_run
//! use pph_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pph").unwrap();
//! println!("Loaded tax config: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateTable, TaxConfig, TaxMetadata};
