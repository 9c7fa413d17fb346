//! Row-level pass/fail decisions.

use rowcheck_model::Record;

use crate::error::{Result, ValidateError};
use crate::patterns::PatternTable;

/// Checks records against a borrowed [`PatternTable`].
#[derive(Debug, Clone, Copy)]
pub struct RowValidator<'a> {
    table: &'a PatternTable,
}

impl<'a> RowValidator<'a> {
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table }
    }

    /// Returns `Ok(true)` when every field in the table matches its pattern.
    ///
    /// A table field absent from the record is an error, not a failed row,
    /// even when an earlier field already fails. Short rows are never padded
    /// with empty values, so every table field is resolved before any match.
    pub fn validate(&self, record: &Record) -> Result<bool> {
        Ok(self.first_mismatch(record)?.is_none())
    }

    /// Name of the first field, in table order, whose value does not match.
    pub fn first_mismatch(&self, record: &Record) -> Result<Option<&'a str>> {
        let values = self
            .table
            .iter()
            .map(|rule| {
                record
                    .get(rule.field())
                    .map(|value| (rule, value))
                    .ok_or_else(|| ValidateError::MissingField {
                        field: rule.field().to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(values
            .into_iter()
            .find(|(rule, value)| !rule.is_match(value))
            .map(|(rule, _)| rule.field()))
    }

    /// Table fields that do not appear among `columns`.
    pub fn missing_columns(&self, columns: &[String]) -> Vec<&'a str> {
        self.table
            .fields()
            .filter(|field| !columns.iter().any(|column| column.as_str() == *field))
            .collect()
    }
}
