//! Power-of-two binning.
//!
//! Records stream through a [`LogBinner`] one at a time; bins are created
//! on first use and kept in key order.

use std::collections::BTreeMap;

use log::debug;

use super::types::{accumulate, BinError, BinRow};
use crate::parser::Record;

/// Which power of two a key is rounded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

/// Compute the power-of-two bin for `key`.
///
/// Returns `Ok(None)` for a zero key, which belongs to no bin.
///
/// # Examples
/// ```
/// use logbin::binning::log_scale::{bin_key, Rounding};
///
/// assert_eq!(bin_key(5, Rounding::Down).unwrap(), Some(4));
/// assert_eq!(bin_key(5, Rounding::Up).unwrap(), Some(8));
/// assert_eq!(bin_key(8, Rounding::Down).unwrap(), Some(8));
/// assert_eq!(bin_key(0, Rounding::Down).unwrap(), None);
/// ```
pub fn bin_key(key: u64, rounding: Rounding) -> Result<Option<u64>, BinError> {
    if key == 0 {
        return Ok(None);
    }
    let bin = match rounding {
        Rounding::Down => 1u64 << (u64::BITS - 1 - key.leading_zeros()),
        Rounding::Up => key
            .checked_next_power_of_two()
            .ok_or(BinError::KeyOverflow { key })?,
    };
    Ok(Some(bin))
}

/// Streaming accumulator keyed by power-of-two bins
#[derive(Debug, Clone)]
pub struct LogBinner {
    rounding: Rounding,
    bins: BTreeMap<u64, Vec<i64>>,
}

impl LogBinner {
    pub fn new(rounding: Rounding) -> Self {
        Self {
            rounding,
            bins: BTreeMap::new(),
        }
    }

    /// Fold one record into its bin. Zero keys are ignored.
    pub fn add(&mut self, record: &Record) -> Result<(), BinError> {
        let Some(bin) = bin_key(record.key, self.rounding)? else {
            debug!("Skipping record with zero key");
            return Ok(());
        };
        let sums = self.bins.entry(bin).or_default();
        accumulate(bin, sums, &record.values)
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Normalized rows in ascending bin order
    pub fn rows(&self) -> Vec<BinRow> {
        self.bins
            .iter()
            .map(|(&bin, sums)| BinRow::normalized(bin, sums))
            .collect()
    }
}
