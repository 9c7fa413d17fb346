//! Error types for input decoding and scanning.

use std::path::PathBuf;

use rowcheck_model::RowIndex;
use rowcheck_validate::ValidateError;
use thiserror::Error;

/// Errors that abort a scan. None of these leave partial results behind.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Bytes are not valid under the declared (or BOM-detected) encoding.
    #[error("{path} is not valid {encoding}")]
    Encoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Parsing Errors ===
    /// Delimited text could not be parsed.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File contains no records at all.
    #[error("input file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// First record has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === Shape Errors ===
    /// Header does not name a column the pattern table requires.
    #[error("malformed header in {path}: required column '{column}' not found")]
    MissingColumn { column: String, path: PathBuf },

    /// A data row is too short to carry a required field.
    #[error("row {row} of {path} has no value for field '{field}'")]
    MissingField {
        path: PathBuf,
        row: RowIndex,
        field: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidateError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
