//! Equal-width binning over `(0, max_key]`.
//!
//! The bin width depends on the largest key, so the whole dataset has to be
//! in memory before any record can be placed.

use std::collections::BTreeMap;

use log::debug;

use super::types::{accumulate, BinError, BinRow, MAX_BINS_LIMIT};
use crate::parser::Record;

/// Bin `records` into `max_bins` equal-width bins.
///
/// Bin keys are the upper edge of each range, `bin_size * (i + 1)`. Every
/// bin up to the one holding the largest key is reported, empty ones with
/// zero values padded to the widest record. With no positive key there is
/// nothing to bin and no rows are returned.
///
/// `max_bins` must lie in `1..=MAX_BINS_LIMIT`.
pub fn bin_linear(records: &[Record], max_bins: u64) -> Result<Vec<BinRow>, BinError> {
    if max_bins == 0 {
        return Err(BinError::NoBins);
    }
    if max_bins > MAX_BINS_LIMIT {
        return Err(BinError::TooManyBins {
            requested: max_bins,
            limit: MAX_BINS_LIMIT,
        });
    }

    let contributing: Vec<&Record> = records.iter().filter(|r| r.key > 0).collect();
    let Some(max_key) = contributing.iter().map(|r| r.key).max() else {
        return Ok(Vec::new());
    };
    let bin_size = max_key.div_ceil(max_bins);
    // Bins past the one holding max_key would always be empty
    let bin_count = max_key.div_ceil(bin_size);
    let width = contributing.iter().map(|r| r.values.len()).max().unwrap_or(0);
    debug!(
        "Linear binning: max key {}, bin size {}, {} bins, width {}",
        max_key, bin_size, bin_count, width
    );

    let mut bins: BTreeMap<u64, Vec<i64>> = BTreeMap::new();
    for i in 1..=bin_count {
        let upper = bin_size
            .checked_mul(i)
            .ok_or(BinError::KeyOverflow { key: max_key })?;
        bins.insert(upper, vec![0; width]);
    }

    for record in contributing {
        // Never above bin_count * bin_size, so the bin already exists
        let bin = record.key.div_ceil(bin_size) * bin_size;
        let sums = bins.entry(bin).or_default();
        accumulate(bin, sums, &record.values)?;
    }

    Ok(bins
        .iter()
        .map(|(&bin, sums)| BinRow::normalized(bin, sums))
        .collect())
}
