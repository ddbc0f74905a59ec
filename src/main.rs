use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use logbin::binning::{self, BinStrategy};
use logbin::config::Config;
use logbin::config_loader;
use logbin::report::{self, OutputFormat};

/// Bin whitespace-delimited numeric data by its first column
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input data file
    input: PathBuf,

    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Binning strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    strategy: Option<BinStrategy>,

    /// Number of bins for linear binning (overrides the config file)
    #[arg(long)]
    max_bins: Option<u64>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write results to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Layer command-line overrides on top of the loaded configuration and
    /// validate the result
    fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(strategy) = self.strategy {
            config.binning.strategy = strategy;
        }
        if let Some(max_bins) = self.max_bins {
            config.binning.max_bins = max_bins;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }

        config.validate()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Logs go to stderr; keep stdout for results
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    info!("Input file: {:?}", args.input);

    let mut config = config_loader::load_or_default(args.config.as_deref())?;
    args.apply_overrides(&mut config)?;

    let rows = binning::bin_file(&args.input, &config.binning)?;
    info!("Computed {} bins", rows.len());

    report::emit(&rows, config.output.format, config.output.path.as_deref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["logbin", "data.txt"]);

        assert_eq!(args.input, PathBuf::from("data.txt"));
        assert!(args.config.is_none());
        assert!(args.strategy.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Args::try_parse_from(["logbin"]).is_err());
    }

    #[test]
    fn test_override_args() {
        let args = Args::parse_from([
            "logbin",
            "data.txt",
            "--strategy", "linear",
            "--max-bins", "20",
            "--format", "json",
            "--output", "bins.json",
        ]);

        let mut config = Config::default();
        args.apply_overrides(&mut config).unwrap();

        assert_eq!(config.binning.strategy, BinStrategy::Linear);
        assert_eq!(config.binning.max_bins, 20);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.path, Some(PathBuf::from("bins.json")));
    }

    #[test]
    fn test_override_keeps_config_values() {
        let args = Args::parse_from(["logbin", "data.txt"]);
        let mut config = Config::default();
        config.binning.strategy = BinStrategy::Ceil;

        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.binning.strategy, BinStrategy::Ceil);
    }

    #[test]
    fn test_override_fixes_invalid_file_value() {
        let args = Args::parse_from(["logbin", "data.txt", "--max-bins", "10"]);
        let mut config = Config::default();
        config.binning.strategy = BinStrategy::Linear;
        config.binning.max_bins = 0;

        args.apply_overrides(&mut config).unwrap();
        assert_eq!(config.binning.max_bins, 10);
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let args = Args::parse_from(["logbin", "data.txt"]);
        let mut config = Config::default();
        config.binning.max_bins = 0;
        assert!(args.apply_overrides(&mut config).is_err());
    }

    #[test]
    fn test_zero_max_bins_rejected() {
        let args = Args::parse_from(["logbin", "data.txt", "--strategy", "linear", "--max-bins", "0"]);
        let mut config = Config::default();
        assert!(args.apply_overrides(&mut config).is_err());
    }
}
