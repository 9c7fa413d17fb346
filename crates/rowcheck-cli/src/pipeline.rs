//! The check and verify pipelines.
//!
//! Both run the same front half: decode the input, scan every row against the
//! pattern table, and checksum the invalid row numbers. `check` then persists
//! the result; `verify` compares it to a stored one.

use std::path::{Path, PathBuf};

use rowcheck_ingest::{IngestError, ScanOptions, ScanOutcome, scan_file};
use rowcheck_model::ResultRecord;
use rowcheck_output::{OutputError, compute_checksum, read_result, verify_checksum, write_result};
use rowcheck_validate::{PatternTable, RowValidator, ValidateError};
use thiserror::Error;
use tracing::{info, info_span};

use crate::types::{CheckResult, VerifyResult};

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Unclassified failure or checksum mismatch.
    pub const FAILURE: i32 = 1;
    pub const INPUT_NOT_FOUND: i32 = 2;
    pub const ENCODING: i32 = 3;
    /// Malformed header, short row, or unparsable delimited text.
    pub const MALFORMED_INPUT: i32 = 4;
    pub const OUTPUT_WRITE: i32 = 5;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to build pattern table: {0}")]
    Patterns(#[source] ValidateError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl PipelineError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Patterns(_) => exit_code::FAILURE,
            Self::Ingest(error) => match error {
                IngestError::FileNotFound { .. } | IngestError::FileRead { .. } => {
                    exit_code::INPUT_NOT_FOUND
                }
                IngestError::Encoding { .. } => exit_code::ENCODING,
                IngestError::CsvParse { .. }
                | IngestError::EmptyFile { .. }
                | IngestError::NoHeaderDetected { .. }
                | IngestError::MissingColumn { .. }
                | IngestError::MissingField { .. }
                | IngestError::Validation(_) => exit_code::MALFORMED_INPUT,
            },
            Self::Output(error) => match error {
                OutputError::Read { .. } => exit_code::INPUT_NOT_FOUND,
                OutputError::Parse { .. } => exit_code::MALFORMED_INPUT,
                error if error.is_write_failure() => exit_code::OUTPUT_WRITE,
                _ => exit_code::FAILURE,
            },
        }
    }
}

/// Compile the standard pattern table.
pub fn standard_patterns() -> Result<PatternTable, PipelineError> {
    PatternTable::standard().map_err(PipelineError::Patterns)
}

/// Inputs for a `check` run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    /// Destination of the result file; `None` skips writing.
    pub output: Option<PathBuf>,
    pub variant: u32,
    pub scan: ScanOptions,
}

/// Inputs for a `verify` run.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub input: PathBuf,
    pub result_path: PathBuf,
    pub scan: ScanOptions,
}

/// Scan, checksum, and (unless dry-running) write the result file.
///
/// Nothing is written when any earlier stage fails.
pub fn run_pipeline(
    config: &PipelineConfig,
    table: &PatternTable,
) -> Result<CheckResult, PipelineError> {
    let span = info_span!("check", input = %config.input.display(), variant = config.variant);
    let _guard = span.enter();

    let outcome = scan(&config.input, &config.scan, table)?;
    let rows_scanned = outcome.rows_scanned;
    let invalid_rows = outcome.invalid_rows.len();

    let checksum = compute_checksum(outcome.invalid_rows)?;
    info!(%checksum, invalid_rows, "checksum computed");
    let record = ResultRecord::new(config.variant, checksum);

    match &config.output {
        Some(path) => write_result(path, &record)?,
        None => info!("dry run, result file not written"),
    }

    Ok(CheckResult {
        input: config.input.clone(),
        output: config.output.clone(),
        rows_scanned,
        invalid_rows,
        record,
    })
}

/// Recompute the checksum of `input` and compare it to a stored result file.
pub fn verify_stored(
    config: &VerifyConfig,
    table: &PatternTable,
) -> Result<VerifyResult, PipelineError> {
    let span = info_span!(
        "verify",
        input = %config.input.display(),
        result = %config.result_path.display()
    );
    let _guard = span.enter();

    let stored = read_result(&config.result_path)?;
    let outcome = scan(&config.input, &config.scan, table)?;
    let rows_scanned = outcome.rows_scanned;
    let invalid_rows = outcome.invalid_rows.len();

    verify_checksum(outcome.invalid_rows, &stored.checksum)?;
    info!(variant = stored.variant, "stored checksum matches");

    Ok(VerifyResult {
        input: config.input.clone(),
        result_path: config.result_path.clone(),
        rows_scanned,
        invalid_rows,
        stored,
    })
}

fn scan(
    input: &Path,
    options: &ScanOptions,
    table: &PatternTable,
) -> Result<ScanOutcome, PipelineError> {
    let validator = RowValidator::new(table);
    Ok(scan_file(input, options, &validator)?)
}
