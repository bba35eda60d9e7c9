//! Recipient Ingestion Module
//!
//! This module turns an input file into validated recipients:
//! - Reader: loads delimited rows from disk
//! - RecipientParser: validates rows and normalizes amounts for one ingestion mode

mod parser;
mod reader;

#[cfg(test)]
mod tests;

pub use parser::{IngestMode, RecipientParser};
pub use reader::{read_rows, read_rows_from};
