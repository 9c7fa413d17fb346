//! Input side of the rowcheck pipeline.
//!
//! This crate decodes a delimited text file (UTF-16 by default), parses it
//! into a header plus data rows, and scans every row through a
//! [`RowValidator`](rowcheck_validate::RowValidator).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rowcheck_ingest::{ScanOptions, scan_file};
//! use rowcheck_validate::{PatternTable, RowValidator};
//!
//! let table = PatternTable::standard()?;
//! let outcome = scan_file(Path::new("80.csv"), &ScanOptions::default(), &RowValidator::new(&table))?;
//! println!("{} of {} rows invalid", outcome.invalid_rows.len(), outcome.rows_scanned);
//! ```

mod delimited;
mod encoding;
mod error;
mod options;
mod scan;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use encoding::{TextEncoding, decode_bytes, decode_file};

// === Delimited Reading ===
pub use delimited::{CsvHeaders, DelimitedTable, read_delimited};

// === Scanning ===
pub use options::ScanOptions;
pub use scan::{ScanOutcome, scan_file, scan_table};
