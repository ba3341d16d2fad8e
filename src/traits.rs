// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::result::ColumnDistribution;
use thiserror::Error;

/// Error type for value distribution operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("Frequency table error: {0}")]
    FrequencyTable(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    #[error("Result sink error: {0}")]
    Sink(String),
}

/// Iterator over the `(key, count)` pairs of a frequency table.
pub type FrequencyIter<'a> =
    Box<dyn Iterator<Item = Result<(String, u64), DistributionError>> + 'a>;

/// Key -> count association for a single column.
///
/// Counts are pre-aggregated: every key appears at most once in `iterate()`.
/// Backing stores may spill to disk, which is why every operation is fallible.
/// Iteration order is unspecified.
pub trait FrequencyTable {
    /// Returns the current count for `key`, if it has been observed.
    fn get(&self, key: &str) -> Result<Option<u64>, DistributionError>;

    /// Sets the count for `key`, replacing any previous count.
    fn put(&mut self, key: &str, count: u64) -> Result<(), DistributionError>;

    /// Yields every `(key, count)` pair exactly once.
    ///
    /// Errors may be returned up front or from any individual item; callers
    /// must treat either as fatal for the scan.
    fn iterate(&self) -> Result<FrequencyIter<'_>, DistributionError>;

    /// Releases any backing resources. Subsequent operations fail.
    fn close(&mut self) -> Result<(), DistributionError>;

    /// Adds `amount` to the count for `key` and returns the new count.
    fn increment(&mut self, key: &str, amount: u64) -> Result<u64, DistributionError> {
        let count = self.get(key)?.unwrap_or(0).saturating_add(amount);
        self.put(key, count)?;
        Ok(count)
    }
}

/// Receiver of per-column aggregation outcomes.
///
/// The sink owns the meaning of the drill-down descriptors attached to rows.
pub trait ResultSink {
    /// Receives the distribution computed for `column`.
    fn accept(
        &mut self,
        column: &str,
        distribution: &ColumnDistribution,
    ) -> Result<(), DistributionError>;

    /// Receives the error that aborted aggregation of `column`.
    fn reject(&mut self, column: &str, error: &DistributionError) -> Result<(), DistributionError>;
}
