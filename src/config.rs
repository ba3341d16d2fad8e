// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

//! Profile configuration.
//!
//! Recognized options, in their JSON form:
//!
//! - `topN`: size of the top window.
//! - `bottomN`: size of the bottom window.
//! - `detailsEnabled`: attach drill-down descriptors to result rows.
//!
//! Non-positive window sizes are replaced with [`DEFAULT_WINDOW_SIZE`] and a
//! warning is logged; sizes above [`MAX_WINDOW_SIZE`] are rejected. Unless both
//! sizes are set the profile produces a full, unbounded distribution.
//!
//! # Example
//!
//! ```
//! use value_distribution::config::{DistributionConfig, DistributionMode};
//!
//! let config = DistributionConfig::from_json_str(r#"{"topN": 4, "bottomN": 3}"#).unwrap();
//! assert_eq!(config.mode(), DistributionMode::Bounded { top_n: 4, bottom_n: 3 });
//!
//! let full = DistributionConfig::from_json_str(r#"{"topN": 4}"#).unwrap();
//! assert_eq!(full.mode(), DistributionMode::Full);
//! ```

use crate::traits::DistributionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Window size used in place of a non-positive configured size.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Largest accepted window size. Every slot of a ranked result is allocated up front.
pub const MAX_WINDOW_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionConfig {
    pub top_n: Option<i64>,
    pub bottom_n: Option<i64>,
    pub details_enabled: bool,
}

/// How a column's distribution is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistributionMode {
    /// Every distinct value, sorted by count.
    Full,
    /// The `top_n` most and `bottom_n` least frequent values. Sizes are as configured
    /// and are corrected at aggregation time.
    Bounded { top_n: i64, bottom_n: i64 },
}

impl DistributionConfig {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn bounded(top_n: i64, bottom_n: i64) -> Self {
        Self {
            top_n: Some(top_n),
            bottom_n: Some(bottom_n),
            details_enabled: false,
        }
    }

    pub fn with_details(mut self, details_enabled: bool) -> Self {
        self.details_enabled = details_enabled;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, DistributionError> {
        serde_json::from_str(json).map_err(|e| DistributionError::Configuration(e.to_string()))
    }

    pub fn from_json_value(value: Value) -> Result<Self, DistributionError> {
        serde_json::from_value(value).map_err(|e| DistributionError::Configuration(e.to_string()))
    }

    /// Selects the presentation mode. Bounded only when both sizes are set.
    pub fn mode(&self) -> DistributionMode {
        match (self.top_n, self.bottom_n) {
            (Some(top_n), Some(bottom_n)) => DistributionMode::Bounded { top_n, bottom_n },
            _ => DistributionMode::Full,
        }
    }
}

/// Converts a configured window size to an effective one.
///
/// `which` names the window in the warning emitted for a corrected size.
/// Sizes above [`MAX_WINDOW_SIZE`] fail with [`DistributionError::Configuration`].
pub fn resolve_window_size(configured: i64, which: &str) -> Result<usize, DistributionError> {
    if configured <= 0 {
        tracing::warn!(
            window = which,
            configured,
            "The {} property was zero or negative, resetting to {}",
            which,
            DEFAULT_WINDOW_SIZE
        );
        return Ok(DEFAULT_WINDOW_SIZE);
    }
    match usize::try_from(configured) {
        Ok(size) if size <= MAX_WINDOW_SIZE => Ok(size),
        _ => Err(DistributionError::Configuration(format!(
            "{} window size {} exceeds the maximum of {}",
            which, configured, MAX_WINDOW_SIZE
        ))),
    }
}
