//! Delimited File Reader
//!
//! Loads every record of a comma-separated file as an ordered list of text fields.
//! Records may have any number of fields here; arity is checked by the parser,
//! which knows the ingestion mode.

use crate::{Error, Result, Row};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read all rows of the file at `path`
///
/// # Arguments
/// * `path` - Path to the input file
/// * `has_headers` - Skip the first record when `true`
///
/// # Returns
/// * `Err(Error::FileUnreadable)` if the file can't be opened or read
/// * `Err(Error::MalformedRecord)` if a record isn't valid CSV (e.g. invalid UTF-8)
pub fn read_rows(path: impl AsRef<Path>, has_headers: bool) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileUnreadable {
        path: path.display().to_string(),
        underlying: e.to_string(),
    })?;

    let rows = read_rows_from(file, &path.display().to_string(), has_headers)?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read all rows from any byte source
///
/// `source` names the input in error messages.
pub fn read_rows_from<R: Read>(reader: R, source: &str, has_headers: bool) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            if e.is_io_error() {
                Error::FileUnreadable {
                    path: source.to_string(),
                    underlying: e.to_string(),
                }
            } else {
                Error::MalformedRecord {
                    row: index + 1,
                    reason: e.to_string(),
                }
            }
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
