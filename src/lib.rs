//! # value-distribution
//!
//! Bounded value distribution profiling for tabular data. For each column the
//! crate reports the N most and M least frequent values, the null bucket and
//! the number of values seen exactly once, without materializing the full
//! distinct-value set.
//!
//! The ranking core is [`RankWindow`]; [`DistributionAggregator`] drives two of
//! them over a column's [`FrequencyTable`] and reconciles the result.

pub mod aggregator;
pub mod config;
pub mod entry;
pub mod enums;
pub mod frequency_table;
pub mod profile;
pub mod rank_window;
pub mod result;
pub mod sink;
pub mod traits;

// Re-export core traits
pub use traits::{DistributionError, FrequencyIter, FrequencyTable, ResultSink};

pub use aggregator::DistributionAggregator;
pub use config::{DistributionConfig, DistributionMode, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};
pub use entry::{Entry, NULL_LABEL};
pub use enums::RankMode;
pub use frequency_table::{MemoryFrequencyTable, SortedFrequencyTable};
pub use profile::{ColumnProfile, ValueDistributionProfile};
pub use rank_window::RankWindow;
pub use result::{
    ColumnDistribution, ColumnResult, DisplayRow, DrillDown, FullResult, FullRow, RankedResult,
    UNIQUE_VALUES_LABEL,
};
pub use sink::MemorySink;
