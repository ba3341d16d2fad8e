// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Value distribution profiling over whole rows.
//!
//! A [`ValueDistributionProfile`] owns one [`ColumnProfile`] per column. Rows are
//! fed in with a repeat count; each column accumulates its null bucket and its
//! own frequency table. Results are computed per column in parallel, and a
//! failing column is reported on its own without affecting the others.
//!
//! # Example
//!
//! ```
//! use value_distribution::{DistributionConfig, ValueDistributionProfile};
//!
//! let mut profile = ValueDistributionProfile::new(DistributionConfig::bounded(2, 2), &["name"]);
//! profile.process_row(&[Some("kasper")], 3).unwrap();
//! profile.process_row(&[None], 2).unwrap();
//! profile.process_row(&[Some("ole")], 1).unwrap();
//!
//! let results = profile.results();
//! let ranked = results[0].outcome.as_ref().unwrap().as_ranked().unwrap();
//! assert_eq!(ranked.cells(), vec!["kasper (3)", "<null> (2)", "", "<Unique values> (1)"]);
//! ```

use crate::aggregator::DistributionAggregator;
use crate::config::{DistributionConfig, DistributionMode};
use crate::frequency_table::MemoryFrequencyTable;
use crate::result::{ColumnDistribution, ColumnResult};
use crate::traits::{DistributionError, FrequencyTable, ResultSink};
use rayon::prelude::*;

/// Accumulated observations for a single column.
#[derive(Debug, Clone)]
pub struct ColumnProfile<T: FrequencyTable> {
    name: String,
    table: T,
    null_count: u64,
}

impl<T: FrequencyTable> ColumnProfile<T> {
    pub fn new(name: impl Into<String>, table: T) -> Self {
        Self {
            name: name.into(),
            table,
            null_count: 0,
        }
    }

    /// Records `value_count` occurrences of `value`; `None` is the null bucket.
    pub fn process_value(
        &mut self,
        value: Option<&str>,
        value_count: u64,
    ) -> Result<(), DistributionError> {
        match value {
            None => self.null_count = self.null_count.saturating_add(value_count),
            Some(value) => {
                self.table.increment(value, value_count)?;
            }
        }
        Ok(())
    }

    pub fn aggregate(
        &self,
        mode: DistributionMode,
        details_enabled: bool,
    ) -> Result<ColumnDistribution, DistributionError> {
        let aggregator = DistributionAggregator::new(self.null_count).with_details(details_enabled);
        match mode {
            DistributionMode::Full => aggregator
                .aggregate_full(&self.table)
                .map(ColumnDistribution::Full),
            DistributionMode::Bounded { top_n, bottom_n } => aggregator
                .aggregate(&self.table, top_n, bottom_n)
                .map(ColumnDistribution::Ranked),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn null_count(&self) -> u64 {
        self.null_count
    }

    pub fn close(&mut self) -> Result<(), DistributionError> {
        self.table.close()?;
        tracing::debug!(column = %self.name, "Closed frequency table");
        Ok(())
    }
}

/// Multi-column value distribution profile.
#[derive(Debug, Clone)]
pub struct ValueDistributionProfile<T: FrequencyTable = MemoryFrequencyTable> {
    config: DistributionConfig,
    columns: Vec<ColumnProfile<T>>,
}

impl ValueDistributionProfile<MemoryFrequencyTable> {
    /// Creates a profile with an in-memory table per column.
    pub fn new(config: DistributionConfig, columns: &[&str]) -> Self {
        Self::with_tables(
            config,
            columns
                .iter()
                .map(|name| (name.to_string(), MemoryFrequencyTable::new())),
        )
    }
}

impl<T: FrequencyTable> ValueDistributionProfile<T> {
    /// Creates a profile over caller-supplied tables, one per named column.
    pub fn with_tables<I>(config: DistributionConfig, columns: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
    {
        Self {
            config,
            columns: columns
                .into_iter()
                .map(|(name, table)| ColumnProfile::new(name, table))
                .collect(),
        }
    }

    pub fn config(&self) -> &DistributionConfig {
        &self.config
    }

    pub fn columns(&self) -> &[ColumnProfile<T>] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Result<&ColumnProfile<T>, DistributionError> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| DistributionError::UnknownColumn(name.to_string()))
    }

    /// Records `count` occurrences of a row, one value per column in column order.
    pub fn process_row(
        &mut self,
        values: &[Option<&str>],
        count: u64,
    ) -> Result<(), DistributionError> {
        if values.len() != self.columns.len() {
            return Err(DistributionError::InvalidInput(format!(
                "Row has {} values but the profile has {} columns",
                values.len(),
                self.columns.len()
            )));
        }
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.process_value(*value, count)?;
        }
        Ok(())
    }

    /// Records `count` occurrences of `value` in the named column.
    pub fn process_value(
        &mut self,
        column: &str,
        value: Option<&str>,
        count: u64,
    ) -> Result<(), DistributionError> {
        self.columns
            .iter_mut()
            .find(|c| c.name == column)
            .ok_or_else(|| DistributionError::UnknownColumn(column.to_string()))?
            .process_value(value, count)
    }

    /// Aggregates a single column.
    pub fn result_for(&self, column: &str) -> Result<ColumnDistribution, DistributionError> {
        self.column(column)?
            .aggregate(self.config.mode(), self.config.details_enabled)
    }

    /// Aggregates every column in parallel, in column order.
    pub fn results(&self) -> Vec<ColumnResult>
    where
        T: Sync,
    {
        let mode = self.config.mode();
        let details_enabled = self.config.details_enabled;
        self.columns
            .par_iter()
            .map(|column| {
                let outcome = column.aggregate(mode, details_enabled);
                if let Err(e) = &outcome {
                    tracing::warn!(
                        column = %column.name,
                        error = %e,
                        "Value distribution failed for column"
                    );
                }
                ColumnResult {
                    column: column.name.clone(),
                    outcome,
                }
            })
            .collect()
    }

    /// Aggregates every column and hands each outcome to `sink`.
    ///
    /// Column failures are passed to [`ResultSink::reject`]; only sink errors
    /// are returned.
    pub fn emit<S>(&self, sink: &mut S) -> Result<(), DistributionError>
    where
        S: ResultSink + ?Sized,
        T: Sync,
    {
        for result in self.results() {
            match &result.outcome {
                Ok(distribution) => sink.accept(&result.column, distribution)?,
                Err(e) => sink.reject(&result.column, e)?,
            }
        }
        Ok(())
    }

    /// Closes every column's table. All columns are attempted; the first error is returned.
    pub fn close(&mut self) -> Result<(), DistributionError> {
        let mut first_error = None;
        for column in &mut self.columns {
            if let Err(e) = column.close() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
