//! Row numbering and the set of rows that failed validation.

/// 1-based ordinal of a data row. The header is not counted.
pub type RowIndex = u64;

/// Row numbers collected during a scan, in scan order.
///
/// Each row is visited once, so no deduplication happens here. Ordering is
/// only normalized when the set is consumed for checksumming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidRows {
    rows: Vec<RowIndex>,
}

impl InvalidRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: RowIndex) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row numbers in the order they were recorded.
    pub fn as_slice(&self) -> &[RowIndex] {
        &self.rows
    }

    /// Consume the set, returning row numbers in ascending order.
    pub fn into_sorted(mut self) -> Vec<RowIndex> {
        self.rows.sort_unstable();
        self.rows
    }
}

impl From<Vec<RowIndex>> for InvalidRows {
    fn from(rows: Vec<RowIndex>) -> Self {
        Self { rows }
    }
}

impl FromIterator<RowIndex> for InvalidRows {
    fn from_iter<I: IntoIterator<Item = RowIndex>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl Extend<RowIndex> for InvalidRows {
    fn extend<I: IntoIterator<Item = RowIndex>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}
