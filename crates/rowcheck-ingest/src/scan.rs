//! Row-by-row validation of a parsed input file.

use std::path::Path;

use rowcheck_model::{InvalidRows, Record, RowIndex};
use rowcheck_validate::{RowValidator, ValidateError};
use tracing::{debug, info, info_span, warn};

use crate::delimited::{DelimitedTable, read_delimited};
use crate::error::{IngestError, Result};
use crate::options::ScanOptions;

/// Everything a completed scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Number of data rows visited (header excluded).
    pub rows_scanned: u64,
    /// 1-based numbers of rows that failed validation, in scan order.
    pub invalid_rows: InvalidRows,
}

/// Read `path` and validate every data row.
///
/// Results are only returned once the whole file has been scanned; any fatal
/// error discards the partial set.
pub fn scan_file(
    path: &Path,
    options: &ScanOptions,
    validator: &RowValidator<'_>,
) -> Result<ScanOutcome> {
    let span = info_span!("scan", path = %path.display());
    let _guard = span.enter();

    let table = read_delimited(path, options)?;
    scan_table(&table, path, validator)
}

/// Validate the rows of an already parsed table.
///
/// `path` is only used for error messages.
pub fn scan_table(
    table: &DelimitedTable,
    path: &Path,
    validator: &RowValidator<'_>,
) -> Result<ScanOutcome> {
    if let Some(column) = validator
        .missing_columns(&table.headers.columns)
        .first()
    {
        return Err(IngestError::MissingColumn {
            column: (*column).to_string(),
            path: path.to_path_buf(),
        });
    }

    let width = table.headers.len();
    let mut outcome = ScanOutcome::default();

    for (index, row) in table.rows.iter().enumerate() {
        let row_number = index as RowIndex + 1;
        if row.len() != width {
            warn!(
                row = row_number,
                fields = row.len(),
                expected = width,
                "row width differs from header"
            );
        }

        let record = Record::from_row(&table.headers.columns, row.iter());
        let mismatch = validator
            .first_mismatch(&record)
            .map_err(|err| match err {
                ValidateError::MissingField { field } => IngestError::MissingField {
                    path: path.to_path_buf(),
                    row: row_number,
                    field,
                },
                other => IngestError::Validation(other),
            })?;

        if let Some(field) = mismatch {
            debug!(row = row_number, field, "row failed validation");
            outcome.invalid_rows.push(row_number);
        }
        outcome.rows_scanned += 1;
    }

    info!(
        rows = outcome.rows_scanned,
        invalid = outcome.invalid_rows.len(),
        "scan complete"
    );
    Ok(outcome)
}
