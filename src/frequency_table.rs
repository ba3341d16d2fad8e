// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! In-memory frequency tables.
//!
//! Two interchangeable stores satisfy the `FrequencyTable` contract:
//!
//! - [`MemoryFrequencyTable`]: hash map, unordered iteration.
//! - [`SortedFrequencyTable`]: B-tree, iterates in key order like an ordered on-disk store.
//!
//! Both reject every operation once closed.

use crate::traits::{DistributionError, FrequencyIter, FrequencyTable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

fn closed_error() -> DistributionError {
    DistributionError::FrequencyTable("table is closed".into())
}

/// Hash map backed frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryFrequencyTable {
    counts: HashMap<String, u64>,
    #[serde(default)]
    closed: bool,
}

impl MemoryFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u64)> for MemoryFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
            closed: false,
        }
    }
}

impl FrequencyTable for MemoryFrequencyTable {
    fn get(&self, key: &str) -> Result<Option<u64>, DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(self.counts.get(key).copied())
    }

    fn put(&mut self, key: &str, count: u64) -> Result<(), DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        self.counts.insert(key.to_string(), count);
        Ok(())
    }

    fn iterate(&self) -> Result<FrequencyIter<'_>, DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(Box::new(
            self.counts
                .iter()
                .map(|(key, &count)| Ok::<_, DistributionError>((key.clone(), count))),
        ))
    }

    fn close(&mut self) -> Result<(), DistributionError> {
        self.counts.clear();
        self.closed = true;
        Ok(())
    }
}

/// B-tree backed frequency table; iteration is ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortedFrequencyTable {
    counts: BTreeMap<String, u64>,
    #[serde(default)]
    closed: bool,
}

impl SortedFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(String, u64)> for SortedFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
            closed: false,
        }
    }
}

impl FrequencyTable for SortedFrequencyTable {
    fn get(&self, key: &str) -> Result<Option<u64>, DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(self.counts.get(key).copied())
    }

    fn put(&mut self, key: &str, count: u64) -> Result<(), DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        self.counts.insert(key.to_string(), count);
        Ok(())
    }

    fn iterate(&self) -> Result<FrequencyIter<'_>, DistributionError> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(Box::new(
            self.counts
                .iter()
                .map(|(key, &count)| Ok::<_, DistributionError>((key.clone(), count))),
        ))
    }

    fn close(&mut self) -> Result<(), DistributionError> {
        self.counts.clear();
        self.closed = true;
        Ok(())
    }
}
