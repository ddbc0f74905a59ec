//! Output of binned rows as plain text or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::binning::BinRow;

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<bin> <value> <value> ...`, one bin per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Format one row as a text line, without the trailing newline.
///
/// # Examples
/// ```
/// use logbin::binning::BinRow;
/// use logbin::report::format_row;
///
/// let row = BinRow { bin: 4, values: vec![3.75, 2.25] };
/// assert_eq!(format_row(&row), "4 3.75 2.25");
/// ```
pub fn format_row(row: &BinRow) -> String {
    let mut line = row.bin.to_string();
    for value in &row.values {
        line.push(' ');
        // Debug keeps the fractional part on whole numbers ("5.0")
        line.push_str(&format!("{:?}", value));
    }
    line
}

/// Write rows as text lines
pub fn write_text<W: Write>(rows: &[BinRow], writer: &mut W) -> io::Result<()> {
    for row in rows {
        writeln!(writer, "{}", format_row(row))?;
    }
    Ok(())
}

/// Write rows as a pretty JSON array
pub fn write_json<W: Write>(rows: &[BinRow], writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows).context("Failed to serialize rows to JSON")?;
    writeln!(writer)?;
    Ok(())
}

/// Write rows in `format`
pub fn write_rows<W: Write>(rows: &[BinRow], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(rows, writer)?,
        OutputFormat::Json => write_json(rows, writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to `output`, or to standard output when it is `None`
pub fn emit(rows: &[BinRow], format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_rows(rows, format, &mut writer)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            log::info!("Wrote {} bins to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_rows(rows, format, &mut writer)?;
        }
    }
    Ok(())
}
