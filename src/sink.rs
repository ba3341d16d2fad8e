// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::result::ColumnDistribution;
use crate::traits::{DistributionError, ResultSink};

/// Result sink that keeps every outcome in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub accepted: Vec<(String, ColumnDistribution)>,
    pub rejected: Vec<(String, DistributionError)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distribution(&self, column: &str) -> Option<&ColumnDistribution> {
        self.accepted
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, distribution)| distribution)
    }

    pub fn error(&self, column: &str) -> Option<&DistributionError> {
        self.rejected
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, error)| error)
    }
}

impl ResultSink for MemorySink {
    fn accept(
        &mut self,
        column: &str,
        distribution: &ColumnDistribution,
    ) -> Result<(), DistributionError> {
        self.accepted.push((column.to_string(), distribution.clone()));
        Ok(())
    }

    fn reject(&mut self, column: &str, error: &DistributionError) -> Result<(), DistributionError> {
        self.rejected.push((column.to_string(), error.clone()));
        Ok(())
    }
}
