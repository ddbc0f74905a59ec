//! Record parsing for whitespace-delimited data files.
//!
//! Each line holds a non-negative integer key followed by zero or more
//! integer values. Files are read line by line through a buffered reader.

use std::io::BufRead;

use log::debug;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First column, used to pick the bin
    pub key: u64,
    /// Remaining columns
    pub values: Vec<i64>,
}

/// Errors that can occur while reading records
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Line {line}: invalid integer token '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("Line {line}: negative key {token}")]
    NegativeKey { line: usize, token: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a single line into a record.
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and only used
/// in error messages.
///
/// # Examples
/// ```
/// use logbin::parser::parse_record;
///
/// let record = parse_record("4 6 8", 1).unwrap().unwrap();
/// assert_eq!(record.key, 4);
/// assert_eq!(record.values, vec![6, 8]);
/// assert!(parse_record("   ", 2).unwrap().is_none());
/// assert!(parse_record("4 six", 3).is_err());
/// ```
pub fn parse_record(line: &str, line_no: usize) -> Result<Option<Record>, ParseError> {
    let mut tokens = line.split_whitespace();

    let Some(key_token) = tokens.next() else {
        return Ok(None);
    };
    let key = parse_key(key_token, line_no)?;

    let values = tokens
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| invalid_token(token, line_no))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Record { key, values }))
}

/// Keys span the full `u64` range. Any other integer with a leading `-`,
/// apart from `-0`, is a negative key.
fn parse_key(token: &str, line_no: usize) -> Result<u64, ParseError> {
    if let Ok(key) = token.parse::<u64>() {
        return Ok(key);
    }
    match token.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            if digits.bytes().all(|b| b == b'0') {
                Ok(0)
            } else {
                Err(ParseError::NegativeKey {
                    line: line_no,
                    token: token.to_string(),
                })
            }
        }
        _ => Err(invalid_token(token, line_no)),
    }
}

fn invalid_token(token: &str, line_no: usize) -> ParseError {
    ParseError::InvalidToken {
        line: line_no,
        token: token.to_string(),
    }
}

/// Stream records from a reader, calling `f` for each one in file order.
///
/// Stops at the first malformed line or the first error returned by `f`.
/// Returns the number of records seen.
pub fn for_each_record<R, F, E>(reader: R, mut f: F) -> Result<usize, E>
where
    R: BufRead,
    F: FnMut(Record) -> Result<(), E>,
    E: From<ParseError>,
{
    let mut count = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(ParseError::from)?;
        match parse_record(&line, idx + 1)? {
            Some(record) => {
                f(record)?;
                count += 1;
            }
            None => debug!("Skipping blank line {}", idx + 1),
        }
    }
    Ok(count)
}

/// Read every record from a reader into memory
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();
    for_each_record::<_, _, ParseError>(reader, |record| {
        records.push(record);
        Ok(())
    })?;
    Ok(records)
}
