// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the data model and configuration loader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series {series} does not exist (chart has {count})")]
    UnknownSeries { series: usize, count: usize },

    #[error("sample {index} does not exist in series {series} (length {len})")]
    UnknownSample { series: usize, index: usize, len: usize },

    #[error("value {0} is not a finite number")]
    NonFiniteValue(f64),

    #[error("series {series} has {len} samples, expected {expected}")]
    LengthMismatch { series: usize, len: usize, expected: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] json5::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
