//! Configuration file structures.
//!
//! Every section and field is optional; anything left out keeps the
//! floor-binning, text-output defaults.
//!
//! ```yaml
//! binning:
//!   strategy: linear   # floor/ceil/linear
//!   max_bins: 50
//! output:
//!   format: json       # text/json
//!   path: bins.json
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::binning::{BinStrategy, BinningOptions, DEFAULT_MAX_BINS, MAX_BINS_LIMIT};
use crate::report::OutputFormat;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub binning: BinningOptions,
    pub output: OutputConfig,
}

/// Where and how results are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid binning configuration: {0}")]
    InvalidBinning(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.binning.max_bins == 0 {
            return Err(ValidationError::InvalidBinning(
                "max_bins must be at least 1".to_string(),
            ));
        }
        if self.binning.max_bins > MAX_BINS_LIMIT {
            return Err(ValidationError::InvalidBinning(format!(
                "max_bins must be at most {}, got {}",
                MAX_BINS_LIMIT, self.binning.max_bins
            )));
        }
        if self.binning.strategy != BinStrategy::Linear
            && self.binning.max_bins != DEFAULT_MAX_BINS
        {
            log::warn!(
                "max_bins = {} has no effect with {:?} binning",
                self.binning.max_bins,
                self.binning.strategy
            );
        }
        Ok(())
    }
}
