//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::BracketRate;

use super::types::{RateTable, TaxConfig, TaxMetadata};

/// Loads and provides access to statutory tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// answers which progressive rate table is in force on a given date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/pph/
/// ├── tax.yaml             # Tax metadata
/// └── rates/
///     ├── 2009-01-01.yaml  # UU 36/2008 revision
///     └── 2022-01-01.yaml  # UU HPP 7/2021 revision
/// ```
///
/// # Example
///
/// ```no_run
/// use pph_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/pph").unwrap();
///
/// // Get the rate table in force on an invoice date
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let table = loader.table_for(date).unwrap();
/// println!("Applying {}", table.label);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/pph")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate table fails statutory-shape validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pph_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/pph")?;
    /// # Ok::<(), pph_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load tax.yaml
        let metadata_path = path.join("tax.yaml");
        let metadata = Self::load_yaml::<TaxMetadata>(&metadata_path)?;

        // Load all rate table revisions from the rates directory
        let rates_dir = path.join("rates");
        let tables = Self::load_tables(&rates_dir)?;

        let config = TaxConfig::new(metadata, tables);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all rate table files from the rates directory.
    fn load_tables(rates_dir: &Path) -> EngineResult<Vec<RateTable>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<RateTable>(&path)?;
                table.validate()?;
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(tables)
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the tax metadata.
    pub fn metadata(&self) -> &TaxMetadata {
        self.config.metadata()
    }

    /// Gets the rate table revision in force on a given date.
    ///
    /// The method finds the most recent revision whose effective date is on
    /// or before the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to get the rate table
    ///
    /// # Returns
    ///
    /// Returns the rate table if one is in force, or `RateTableNotFound` if
    /// the date precedes every revision.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pph_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/pph")?;
    /// let date = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
    /// let table = loader.table_for(date)?;
    /// println!("{}", table.label);
    /// # Ok::<(), pph_engine::error::EngineError>(())
    /// ```
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .tables()
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
            .ok_or(EngineError::RateTableNotFound { date })
    }

    /// Gets the progressive brackets in force on a given date.
    ///
    /// Convenience wrapper over [`table_for`](Self::table_for) for callers
    /// that only need the bracket slice.
    pub fn brackets_for(&self, date: NaiveDate) -> EngineResult<&[BracketRate]> {
        Ok(&self.table_for(date)?.brackets)
    }
}
