// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::entry::Entry;
use crate::enums::RankMode;
use serde::{Deserialize, Serialize};

/// RankWindow - Bounded Top/Bottom Ranking
///
/// Retains the `capacity` highest (`Top`) or lowest (`Bottom`) counted entries seen so far,
/// kept in a contiguous vector sorted ascending by count.
///
/// # Key Properties
///
/// - **Bounded**: `len() <= capacity()` after every operation.
/// - **Sorted**: entries are non-decreasing by count; descending views are reverse traversals.
/// - **Singletons excluded**: entries with a count of exactly 1 are never admitted.
/// - **FIFO ties**: among entries sharing the boundary score, the earliest admitted is evicted first.
///
/// Insertion is a linear scan. Capacities are small, so no heap or tree is needed.
///
/// # Example
///
/// ```
/// use value_distribution::{Entry, RankMode, RankWindow};
///
/// let mut top = RankWindow::new(RankMode::Top, 2);
/// assert!(top.register(Entry::new("apple", 10)));
/// assert!(top.register(Entry::new("banana", 20)));
/// assert!(top.register(Entry::new("cherry", 15))); // evicts apple
/// assert!(!top.register(Entry::new("date", 1)));   // singleton
///
/// let keys: Vec<_> = top.iter_descending().map(|e| e.label()).collect();
/// assert_eq!(keys, vec!["banana", "cherry"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankWindow {
    mode: RankMode,
    capacity: usize,
    entries: Vec<Entry>,
}

impl RankWindow {
    /// Creates an empty window. A capacity of 0 admits nothing.
    pub fn new(mode: RankMode, capacity: usize) -> Self {
        Self {
            mode,
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn top(capacity: usize) -> Self {
        Self::new(RankMode::Top, capacity)
    }

    pub fn bottom(capacity: usize) -> Self {
        Self::new(RankMode::Bottom, capacity)
    }

    /// Offers an entry to the window and returns whether it is retained.
    ///
    /// When the window is full the entry must beat the eviction boundary
    /// strictly: a count equal to the boundary score is rejected.
    pub fn register(&mut self, entry: Entry) -> bool {
        if entry.count == 1 || self.capacity == 0 {
            return false;
        }
        if self.entries.is_empty() {
            self.entries.push(entry);
            return true;
        }

        let full = self.entries.len() >= self.capacity;
        if full && !self.beats_boundary(entry.count) {
            return false;
        }

        let index = self.insertion_index(entry.count);
        self.entries.insert(index, entry);
        if full {
            self.evict();
        }
        true
    }

    /// Shrinks the capacity by one, evicting a boundary entry first if the window is full.
    pub fn decrement_capacity(&mut self) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict();
        }
        self.capacity -= 1;
    }

    /// Removes every entry whose count is strictly greater than `threshold`.
    pub fn remove_above(&mut self, threshold: u64) {
        self.entries.retain(|entry| entry.count <= threshold);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn lowest_score(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.count)
    }

    pub fn highest_score(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> RankMode {
        self.mode
    }

    pub fn iter_ascending(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn iter_descending(&self) -> std::iter::Rev<std::slice::Iter<'_, Entry>> {
        self.entries.iter().rev()
    }

    /// All entries holding exactly `score`, in ascending window order.
    pub fn entries_with_score(&self, score: u64) -> Vec<&Entry> {
        self.entries.iter().filter(|entry| entry.count == score).collect()
    }

    fn beats_boundary(&self, count: u64) -> bool {
        match self.mode {
            RankMode::Top => self.lowest_score().map_or(true, |lowest| count > lowest),
            RankMode::Bottom => self.highest_score().map_or(true, |highest| count < highest),
        }
    }

    // Top places a new entry after its equal-count peers and Bottom before them,
    // so the oldest peer always sits nearest the eviction end.
    fn insertion_index(&self, count: u64) -> usize {
        let position = match self.mode {
            RankMode::Top => self.entries.iter().position(|entry| entry.count > count),
            RankMode::Bottom => self.entries.iter().position(|entry| entry.count >= count),
        };
        position.unwrap_or(self.entries.len())
    }

    fn evict(&mut self) {
        match self.mode {
            RankMode::Top => {
                if !self.entries.is_empty() {
                    self.entries.remove(0);
                }
            }
            RankMode::Bottom => {
                self.entries.pop();
            }
        }
    }
}
