//! Configuration types for statutory tax rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with the
//! statutory-shape validation applied to every loaded rate table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::BracketRate;

/// Metadata about the tax configuration.
///
/// Identifies which statute family the configuration models, its current
/// revision, and where the source text lives.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxMetadata {
    /// Short code for the configuration (e.g., "PPH-WHT").
    pub code: String,
    /// The human-readable name of the tax regime family.
    pub name: String,
    /// The effective date of the newest revision carried.
    pub version: String,
    /// URL to the official statute text.
    pub source_url: String,
}

/// One revision of the progressive bracket table, effective from a date.
///
/// Revisions correspond to statute changes: the UU 36/2008 table applies
/// from 2009, the UU HPP 7/2021 table from 2022. The engine picks the
/// newest revision effective on or before the invoice date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// The date this revision came into force.
    pub effective_date: NaiveDate,
    /// The statute this revision implements (e.g., "UU HPP No. 7/2021").
    pub label: String,
    /// Progressive brackets in ascending order.
    pub brackets: Vec<BracketRate>,
}

impl RateTable {
    /// Validates that the brackets form a well-shaped progressive table.
    ///
    /// A valid table is non-empty, starts at zero, is contiguous and
    /// ascending, ends with a single unbounded bracket, and carries rates
    /// within `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        let Some(first) = self.brackets.first() else {
            return Err(EngineError::InvalidRateTable {
                message: format!("table '{}' has no brackets", self.label),
            });
        };

        if first.floor != Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                message: format!("table '{}' must start at floor 0", self.label),
            });
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(EngineError::InvalidRateTable {
                    message: format!(
                        "table '{}' bracket {} has rate {} outside [0, 1]",
                        self.label, index, bracket.rate
                    ),
                });
            }

            match bracket.ceiling {
                Some(ceiling) => {
                    if ceiling <= bracket.floor {
                        return Err(EngineError::InvalidRateTable {
                            message: format!(
                                "table '{}' bracket {} has ceiling {} not above floor {}",
                                self.label, index, ceiling, bracket.floor
                            ),
                        });
                    }
                }
                None => {
                    if index != self.brackets.len() - 1 {
                        return Err(EngineError::InvalidRateTable {
                            message: format!(
                                "table '{}' has an unbounded bracket before the last",
                                self.label
                            ),
                        });
                    }
                }
            }
        }

        // Contiguity: each floor picks up exactly where the previous
        // bracket left off.
        for (index, pair) in self.brackets.windows(2).enumerate() {
            if Some(pair[1].floor) != pair[0].ceiling {
                return Err(EngineError::InvalidRateTable {
                    message: format!(
                        "table '{}' bracket {} floor {} does not meet the previous ceiling",
                        self.label,
                        index + 1,
                        pair[1].floor
                    ),
                });
            }
        }

        if self.brackets.last().is_some_and(|b| b.ceiling.is_some()) {
            return Err(EngineError::InvalidRateTable {
                message: format!("table '{}' must end with an unbounded bracket", self.label),
            });
        }

        Ok(())
    }
}

/// The complete tax configuration loaded from YAML files.
///
/// Aggregates the metadata and every rate-table revision found in a
/// configuration directory, with revisions sorted oldest first.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Tax metadata.
    metadata: TaxMetadata,
    /// Rate table revisions by effective date (sorted oldest first).
    tables: Vec<RateTable>,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(metadata: TaxMetadata, tables: Vec<RateTable>) -> Self {
        let mut sorted_tables = tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            tables: sorted_tables,
        }
    }

    /// Returns the tax metadata.
    pub fn metadata(&self) -> &TaxMetadata {
        &self.metadata
    }

    /// Returns all rate table revisions, oldest first.
    pub fn tables(&self) -> &[RateTable] {
        &self.tables
    }
}
