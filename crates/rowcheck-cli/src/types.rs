use std::path::PathBuf;

use rowcheck_model::ResultRecord;

/// Outcome of a `check` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub input: PathBuf,
    /// Where the result was written; `None` for a dry run.
    pub output: Option<PathBuf>,
    pub rows_scanned: u64,
    pub invalid_rows: usize,
    pub record: ResultRecord,
}

/// Outcome of a successful `verify` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    pub input: PathBuf,
    pub result_path: PathBuf,
    pub rows_scanned: u64,
    pub invalid_rows: usize,
    pub stored: ResultRecord,
}
