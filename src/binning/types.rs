//! Shared types for the binning strategies.

use serde::{Deserialize, Serialize};

/// Default number of bins for linear binning
pub const DEFAULT_MAX_BINS: u64 = 100;

/// Upper limit on the number of linear bins
pub const MAX_BINS_LIMIT: u64 = 1_000_000;

/// How record keys are mapped to bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BinStrategy {
    /// Largest power of two not above the key
    #[default]
    Floor,
    /// Smallest power of two not below the key
    Ceil,
    /// Equal-width bins spanning `(0, max_key]`
    Linear,
}

/// Binning settings, loadable from the `binning` section of a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningOptions {
    pub strategy: BinStrategy,
    /// Number of bins; only used by [`BinStrategy::Linear`]
    pub max_bins: u64,
}

impl Default for BinningOptions {
    fn default() -> Self {
        Self {
            strategy: BinStrategy::Floor,
            max_bins: DEFAULT_MAX_BINS,
        }
    }
}

/// One output line: a bin key and its normalized sums
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinRow {
    pub bin: u64,
    pub values: Vec<f64>,
}

impl BinRow {
    /// Divide each accumulated sum by the bin key
    pub fn normalized(bin: u64, sums: &[i64]) -> Self {
        let divisor = bin as f64;
        Self {
            bin,
            values: sums.iter().map(|&sum| sum as f64 / divisor).collect(),
        }
    }
}

/// Errors raised while accumulating records into bins
#[derive(Debug, thiserror::Error)]
pub enum BinError {
    #[error("Bin key for {key} does not fit in 64 bits")]
    KeyOverflow { key: u64 },

    #[error("Sum overflowed in bin {bin} at column {column}")]
    SumOverflow { bin: u64, column: usize },

    #[error("Linear binning needs at least one bin")]
    NoBins,

    #[error("Linear binning supports at most {limit} bins, got {requested}")]
    TooManyBins { requested: u64, limit: u64 },
}

/// Add `values` element-wise into `sums`, growing `sums` with zeros when
/// `values` is longer.
pub fn accumulate(bin: u64, sums: &mut Vec<i64>, values: &[i64]) -> Result<(), BinError> {
    if sums.len() < values.len() {
        sums.resize(values.len(), 0);
    }
    for (column, (sum, &value)) in sums.iter_mut().zip(values).enumerate() {
        // Column numbers are reported 1-based, after the key column
        *sum = sum
            .checked_add(value)
            .ok_or(BinError::SumOverflow { bin, column: column + 1 })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_pads_shorter_sums() {
        let mut sums = vec![1];
        accumulate(4, &mut sums, &[2, 3, 4]).unwrap();
        assert_eq!(sums, vec![3, 3, 4]);
    }

    #[test]
    fn test_accumulate_keeps_longer_sums() {
        let mut sums = vec![1, 1, 1];
        accumulate(4, &mut sums, &[5]).unwrap();
        assert_eq!(sums, vec![6, 1, 1]);
    }

    #[test]
    fn test_accumulate_overflow() {
        let mut sums = vec![0, i64::MAX];
        let err = accumulate(8, &mut sums, &[1, 1]).unwrap_err();
        assert!(matches!(err, BinError::SumOverflow { bin: 8, column: 2 }));
    }

    #[test]
    fn test_normalized_row() {
        let row = BinRow::normalized(4, &[15, 9]);
        assert_eq!(row.values, vec![3.75, 2.25]);
    }

    #[test]
    fn test_options_default() {
        let options = BinningOptions::default();
        assert_eq!(options.strategy, BinStrategy::Floor);
        assert_eq!(options.max_bins, 100);
    }
}
