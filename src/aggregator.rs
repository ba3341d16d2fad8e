// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::config::resolve_window_size;
use crate::entry::Entry;
use crate::rank_window::RankWindow;
use crate::result::{DisplayRow, DrillDown, FullResult, FullRow, RankedResult};
use crate::traits::{DistributionError, FrequencyTable};
use serde::{Deserialize, Serialize};

/// DistributionAggregator - Column Value Distribution
///
/// Turns one column's frequency table into a presentable distribution with a
/// single scan. Values seen exactly once are counted in a separate unique-value
/// bucket and never ranked; the null bucket ranks like any other value.
///
/// Two presentations are available:
///
/// - [`aggregate`](Self::aggregate): the `top_n` most and `bottom_n` least frequent values,
///   held in two bounded [`RankWindow`]s.
/// - [`aggregate_full`](Self::aggregate_full): every value with its share of the total.
///
/// A column's scan is strictly sequential. Columns are independent of each other.
///
/// # Example
///
/// ```
/// use value_distribution::{DistributionAggregator, FrequencyTable, MemoryFrequencyTable};
///
/// let mut table = MemoryFrequencyTable::new();
/// table.put("foo", 40).unwrap();
/// table.put("bar", 2).unwrap();
/// table.put("baz", 1).unwrap();
///
/// let result = DistributionAggregator::new(0).aggregate(&table, 2, 2).unwrap();
/// assert_eq!(result.cells(), vec!["foo (40)", "bar (2)", "", "<Unique values> (1)"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributionAggregator {
    null_count: u64,
    details_enabled: bool,
}

impl DistributionAggregator {
    /// Creates an aggregator for a column with `null_count` null observations.
    pub fn new(null_count: u64) -> Self {
        Self {
            null_count,
            details_enabled: false,
        }
    }

    /// Attaches drill-down descriptors to every non-empty row.
    pub fn with_details(mut self, details_enabled: bool) -> Self {
        self.details_enabled = details_enabled;
        self
    }

    pub fn null_count(&self) -> u64 {
        self.null_count
    }

    /// Computes the bounded top/bottom distribution.
    ///
    /// Non-positive sizes are corrected to the default with a warning; sizes above
    /// [`MAX_WINDOW_SIZE`](crate::config::MAX_WINDOW_SIZE) are rejected. Any error
    /// from the table aborts the scan and nothing is produced for the column.
    pub fn aggregate<T>(
        &self,
        table: &T,
        top_n: i64,
        bottom_n: i64,
    ) -> Result<RankedResult, DistributionError>
    where
        T: FrequencyTable + ?Sized,
    {
        let top_n = resolve_window_size(top_n, "top")?;
        let bottom_n = resolve_window_size(bottom_n, "bottom")?;

        let mut top = RankWindow::top(top_n);
        let mut bottom = RankWindow::bottom(bottom_n);
        let mut unique_value_count = 0u64;

        // Registered directly: a null bucket of one is rejected by the windows
        // and is not a unique value.
        if self.null_count > 0 {
            let entry = Entry::null(self.null_count);
            top.register(entry.clone());
            bottom.register(entry);
        }

        let mut observe = |key: String, count: u64| {
            if count == 1 {
                unique_value_count += 1;
                // One slot is reserved for the placeholder row, however many singletons exist.
                if unique_value_count == 1 {
                    bottom.decrement_capacity();
                }
            } else {
                let entry = Entry::new(key, count);
                top.register(entry.clone());
                bottom.register(entry);
            }
        };

        for item in table.iterate()? {
            let (key, count) = item?;
            observe(key, count);
        }

        if let Some(lowest) = top.lowest_score() {
            let tied = top.entries_with_score(lowest).len();
            if tied > 1 {
                tracing::debug!(score = lowest, tied, "Top window boundary holds tied entries");
            }
            // Drop bottom entries already covered by the top window.
            match lowest.checked_sub(1) {
                Some(threshold) => bottom.remove_above(threshold),
                None => bottom.clear(),
            }
        }

        let slots = top_n.checked_add(bottom_n).ok_or_else(|| {
            DistributionError::Configuration("window sizes overflow the slot count".into())
        })?;
        let mut rows = vec![DisplayRow::Empty; slots];

        for (slot, entry) in top.iter_descending().enumerate() {
            rows[slot] = DisplayRow::from_entry(entry, self.details_enabled);
        }

        let mut bottom_slots = (top_n..slots).rev();
        if unique_value_count > 0 {
            if let Some(slot) = bottom_slots.next() {
                rows[slot] = DisplayRow::UniqueValues {
                    count: unique_value_count,
                    drill_down: self.details_enabled.then_some(DrillDown::CountEqualsOne),
                };
            }
        }
        for (slot, entry) in bottom_slots.zip(bottom.iter_ascending()) {
            rows[slot] = DisplayRow::from_entry(entry, self.details_enabled);
        }

        tracing::debug!(
            top_n,
            bottom_n,
            top_len = top.len(),
            bottom_len = bottom.len(),
            unique_value_count,
            null_count = self.null_count,
            "Aggregated bounded value distribution"
        );

        Ok(RankedResult {
            top_n,
            bottom_n,
            rows,
            null_count: self.null_count,
            unique_value_count,
        })
    }

    /// Computes the unbounded distribution: every value with its count and
    /// whole-percent share of the column total, highest count first, with all
    /// singletons collapsed into a trailing unique-values row.
    pub fn aggregate_full<T>(&self, table: &T) -> Result<FullResult, DistributionError>
    where
        T: FrequencyTable + ?Sized,
    {
        let mut repeated: Vec<Entry> = Vec::new();
        let mut unique_values: Vec<Option<String>> = Vec::new();
        let mut total_count = self.null_count;

        if self.null_count == 1 {
            unique_values.push(None);
        } else if self.null_count > 1 {
            repeated.push(Entry::null(self.null_count));
        }

        for item in table.iterate()? {
            let (key, count) = item?;
            total_count = total_count.saturating_add(count);
            if count == 1 {
                unique_values.push(Some(key));
            } else {
                repeated.push(Entry::new(key, count));
            }
        }

        // Stable, so equal counts keep scan order.
        repeated.sort_by(|a, b| b.count.cmp(&a.count));

        let percentage = |count: u64| -> u64 {
            if total_count == 0 {
                0
            } else {
                ((count as u128 * 100) / total_count as u128) as u64
            }
        };

        let mut rows: Vec<FullRow> = repeated
            .iter()
            .map(|entry| FullRow {
                row: DisplayRow::from_entry(entry, self.details_enabled),
                percentage: percentage(entry.count),
            })
            .collect();

        let unique_value_count = unique_values.len() as u64;
        if unique_value_count > 0 {
            rows.push(FullRow {
                row: DisplayRow::UniqueValues {
                    count: unique_value_count,
                    drill_down: self.details_enabled.then(|| DrillDown::Values(unique_values)),
                },
                percentage: percentage(unique_value_count),
            });
        }

        tracing::debug!(
            rows = rows.len(),
            total_count,
            unique_value_count,
            null_count = self.null_count,
            "Aggregated full value distribution"
        );

        Ok(FullResult {
            rows,
            total_count,
            null_count: self.null_count,
            unique_value_count,
        })
    }
}
