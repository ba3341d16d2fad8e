// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::entry::{Entry, NULL_LABEL};
use crate::traits::DistributionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the aggregate row standing in for all singleton values.
pub const UNIQUE_VALUES_LABEL: &str = "<Unique values>";

/// Opaque description of the records behind a result row.
///
/// The result sink decides how to turn it into a query or a record fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillDown {
    /// Records whose value equals the key.
    ValueEquals(String),
    /// Records whose value is null.
    IsNull,
    /// Records whose value occurs exactly once in the column.
    CountEqualsOne,
    /// The singleton values themselves.
    Values(Vec<Option<String>>),
}

impl DrillDown {
    pub fn for_key(key: Option<&str>) -> Self {
        match key {
            Some(key) => DrillDown::ValueEquals(key.to_string()),
            None => DrillDown::IsNull,
        }
    }
}

/// One display slot of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayRow {
    Value {
        key: Option<String>,
        count: u64,
        drill_down: Option<DrillDown>,
    },
    UniqueValues {
        count: u64,
        drill_down: Option<DrillDown>,
    },
    #[default]
    Empty,
}

impl DisplayRow {
    pub(crate) fn from_entry(entry: &Entry, details_enabled: bool) -> Self {
        DisplayRow::Value {
            key: entry.key.clone(),
            count: entry.count,
            drill_down: details_enabled.then(|| DrillDown::for_key(entry.key.as_deref())),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayRow::Empty)
    }

    pub fn count(&self) -> Option<u64> {
        match self {
            DisplayRow::Value { count, .. } | DisplayRow::UniqueValues { count, .. } => {
                Some(*count)
            }
            DisplayRow::Empty => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            DisplayRow::Value { key, .. } => Some(key.as_deref().unwrap_or(NULL_LABEL)),
            DisplayRow::UniqueValues { .. } => Some(UNIQUE_VALUES_LABEL),
            DisplayRow::Empty => None,
        }
    }

    pub fn drill_down(&self) -> Option<&DrillDown> {
        match self {
            DisplayRow::Value { drill_down, .. } | DisplayRow::UniqueValues { drill_down, .. } => {
                drill_down.as_ref()
            }
            DisplayRow::Empty => None,
        }
    }
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label(), self.count()) {
            (Some(label), Some(count)) => write!(f, "{} ({})", label, count),
            _ => Ok(()),
        }
    }
}

/// Bounded distribution of one column: `top_n` slots followed by `bottom_n` slots.
///
/// Top slots hold the most frequent values, highest first. Bottom slots are
/// filled from the end: the last slot ("bottom 1") holds the unique-values
/// placeholder when the column has singletons, and the least frequent value
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub top_n: usize,
    pub bottom_n: usize,
    pub rows: Vec<DisplayRow>,
    pub null_count: u64,
    pub unique_value_count: u64,
}

impl RankedResult {
    /// Label of the slot at `index`: `top 1..top N`, then `bottom M..bottom 1`.
    pub fn slot_label(&self, index: usize) -> String {
        if index < self.top_n {
            format!("top {}", index + 1)
        } else {
            format!("bottom {}", self.top_n + self.bottom_n - index)
        }
    }

    pub fn labeled_rows(&self) -> impl Iterator<Item = (String, &DisplayRow)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(move |(index, row)| (self.slot_label(index), row))
    }

    pub fn top_rows(&self) -> &[DisplayRow] {
        &self.rows[..self.top_n.min(self.rows.len())]
    }

    pub fn bottom_rows(&self) -> &[DisplayRow] {
        &self.rows[self.top_n.min(self.rows.len())..]
    }

    /// Rendered cell text per slot, empty slots as empty strings.
    pub fn cells(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(DisplayRow::is_empty)
    }
}

/// One row of an unbounded distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullRow {
    pub row: DisplayRow,
    /// Whole percent of the column's total count, rounded down.
    pub percentage: u64,
}

impl fmt::Display for FullRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.row, self.percentage)
    }
}

/// Unbounded distribution of one column, sorted by count descending with the
/// unique-values row last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullResult {
    pub rows: Vec<FullRow>,
    pub total_count: u64,
    pub null_count: u64,
    pub unique_value_count: u64,
}

impl FullResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnDistribution {
    Ranked(RankedResult),
    Full(FullResult),
}

impl ColumnDistribution {
    pub fn as_ranked(&self) -> Option<&RankedResult> {
        match self {
            ColumnDistribution::Ranked(result) => Some(result),
            ColumnDistribution::Full(_) => None,
        }
    }

    pub fn as_full(&self) -> Option<&FullResult> {
        match self {
            ColumnDistribution::Full(result) => Some(result),
            ColumnDistribution::Ranked(_) => None,
        }
    }
}

/// Outcome of aggregating one column. A failed column carries its error and
/// does not affect the other columns of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResult {
    pub column: String,
    pub outcome: Result<ColumnDistribution, DistributionError>,
}
