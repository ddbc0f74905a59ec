//! # Logbin - binning of whitespace-delimited numeric data
//!
//! Reads text files where each line holds a non-negative integer key
//! followed by integer values, groups lines into bins by key, sums the
//! values column by column and reports each sum divided by its bin key.
//!
//! ## Strategies
//!
//! - **Floor** (default): bin `2^floor(log2(key))`, the range `[bin, 2*bin)`
//! - **Ceil**: bin `2^ceil(log2(key))`
//! - **Linear**: `max_bins` equal-width bins over `(0, max_key]`
//!
//! Lines whose key is zero never contribute. A non-integer token or a
//! negative key aborts the run.
//!
//! ## Architecture
//!
//! - `parser`: line parsing into [`parser::Record`]s
//! - `binning`: the binning strategies and file driver
//! - `report`: text and JSON output
//! - `config`, `config_loader`: optional YAML configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use logbin::binning::{bin_reader, BinningOptions};
//! use logbin::report::write_text;
//!
//! let input = Cursor::new("3 10 20\n4 6 8\n5 9 1\n");
//! let rows = bin_reader(input, &BinningOptions::default())?;
//!
//! let mut out = Vec::new();
//! write_text(&rows, &mut out)?;
//! assert_eq!(String::from_utf8(out)?, "2 5.0 10.0\n4 3.75 2.25\n");
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Parsing and binning raise typed errors (`ParseError`, `BinError`,
//! `ValidationError`); file-level functions wrap them in
//! `color_eyre::eyre::Error` with the offending path attached.

pub mod binning;
pub mod config;
pub mod config_loader;
pub mod parser;
pub mod report;
