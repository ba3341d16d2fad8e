// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when rendering the null bucket.
pub const NULL_LABEL: &str = "<null>";

/// A ranked `(key, count)` observation.
///
/// Ranking looks at `count` only; `key` is carried as payload. A `None` key is
/// the null bucket, which ranks exactly like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: Option<String>,
    pub count: u64,
}

impl Entry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: Some(key.into()),
            count,
        }
    }

    /// Creates the entry for the null bucket.
    pub fn null(count: u64) -> Self {
        Self { key: None, count }
    }

    pub fn is_null(&self) -> bool {
        self.key.is_none()
    }

    /// Key as displayed, with the null bucket rendered as `<null>`.
    pub fn label(&self) -> &str {
        self.key.as_deref().unwrap_or(NULL_LABEL)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.count)
    }
}
