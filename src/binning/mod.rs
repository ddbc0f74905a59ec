//! Binning of parsed records.
//!
//! Power-of-two strategies stream records straight from the reader; linear
//! binning collects the whole file first.

pub mod linear;
pub mod log_scale;
pub mod types;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use color_eyre::eyre::{Context, Report, Result};
use log::info;

use crate::parser::{for_each_record, read_records, Record};

pub use linear::bin_linear;
pub use log_scale::{bin_key, LogBinner, Rounding};
pub use types::*;

impl BinStrategy {
    /// Rounding mode for the power-of-two strategies
    pub fn rounding(self) -> Option<Rounding> {
        match self {
            BinStrategy::Floor => Some(Rounding::Down),
            BinStrategy::Ceil => Some(Rounding::Up),
            BinStrategy::Linear => None,
        }
    }
}

/// Bin records that are already in memory
pub fn bin_records(records: &[Record], options: &BinningOptions) -> Result<Vec<BinRow>> {
    let rows = match options.strategy.rounding() {
        Some(rounding) => {
            let mut binner = LogBinner::new(rounding);
            for record in records {
                binner.add(record)?;
            }
            binner.rows()
        }
        None => bin_linear(records, options.max_bins)?,
    };
    Ok(rows)
}

/// Read records from `reader` and bin them
pub fn bin_reader<R: BufRead>(reader: R, options: &BinningOptions) -> Result<Vec<BinRow>> {
    let rows = match options.strategy.rounding() {
        Some(rounding) => {
            let mut binner = LogBinner::new(rounding);
            let count = for_each_record::<_, _, Report>(reader, |record| {
                binner.add(&record)?;
                Ok(())
            })?;
            info!("Read {} records into {} bins", count, binner.bin_count());
            binner.rows()
        }
        None => {
            let records = read_records(reader)?;
            info!("Read {} records", records.len());
            bin_linear(&records, options.max_bins)?
        }
    };
    Ok(rows)
}

/// Open `path` and bin its contents
pub fn bin_file(path: &Path, options: &BinningOptions) -> Result<Vec<BinRow>> {
    info!("Binning {} with {:?} strategy", path.display(), options.strategy);
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    bin_reader(reader, options)
        .with_context(|| format!("Failed to bin input file: {}", path.display()))
}
