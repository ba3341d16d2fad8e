// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use crate::traits::DistributionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which end of the distribution a `RankWindow` retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankMode {
    /// Keeps the highest counts; evicts the lowest.
    Top,
    /// Keeps the lowest counts; evicts the highest.
    Bottom,
}

impl fmt::Display for RankMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMode::Top => write!(f, "top"),
            RankMode::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for RankMode {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(RankMode::Top),
            "bottom" => Ok(RankMode::Bottom),
            _ => Err(DistributionError::InvalidInput(format!("Unknown rank mode: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_mode_round_trips_through_display() {
        assert_eq!("top".parse::<RankMode>().unwrap(), RankMode::Top);
        assert_eq!(" Bottom ".parse::<RankMode>().unwrap(), RankMode::Bottom);
        assert_eq!(RankMode::Bottom.to_string().parse::<RankMode>().unwrap(), RankMode::Bottom);
        assert!("middle".parse::<RankMode>().is_err());
    }
}
