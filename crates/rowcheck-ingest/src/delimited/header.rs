//! Header row handling.

/// Column names taken from the first record of the file.
///
/// Names are kept verbatim (no trimming or case folding); a header column
/// must match a pattern field exactly to be recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvHeaders {
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from raw fields, dropping a stray leading BOM.
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut columns: Vec<String> = fields
            .into_iter()
            .map(|field| field.as_ref().to_string())
            .collect();
        if let Some(first) = columns.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when no column carries a usable name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|column| column.trim().is_empty())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
