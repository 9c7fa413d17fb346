//! Per-row records keyed by column name.

use std::collections::HashMap;

/// A single data row, mapping header column names to raw string values.
///
/// Records are transient: built per row by the scanner, checked, then dropped.
/// A row shorter than the header simply lacks the trailing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by zipping header columns with row fields.
    ///
    /// Extra fields beyond the header are ignored. When a column name repeats,
    /// the later value wins.
    pub fn from_row<H, F>(columns: H, fields: F) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let values = columns
            .into_iter()
            .zip(fields)
            .map(|(column, value)| (column.into(), value.into()))
            .collect();
        Self { values }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
