//! Error types for row validation.

use thiserror::Error;

/// Errors raised while building the pattern table or validating a row.
///
/// A value that fails its pattern is not an error; it is reported as
/// `Ok(false)` by the validator.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A rule's regular expression failed to compile.
    #[error("invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// A field named in the pattern table is absent from the record.
    #[error("field '{field}' is missing from the record")]
    MissingField { field: String },
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidateError::MissingField {
            field: "inn".to_string(),
        };
        assert_eq!(err.to_string(), "field 'inn' is missing from the record");
    }
}
