//! Error types for checksum and result file operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON encoding failed.
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the result file (or its temporary sibling) failed.
    #[error("failed to {operation} {path}: {source}")]
    Write {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving the finished temporary file into place failed.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a stored result file failed.
    #[error("failed to read result file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored result file is not a valid `{variant, checksum}` object.
    #[error("invalid result file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A recomputed checksum differs from the expected one.
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

impl OutputError {
    /// True for failures that left the destination file unwritten.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::AtomicWriteFailed { .. })
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
