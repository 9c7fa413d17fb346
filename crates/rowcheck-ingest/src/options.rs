//! Input format options.

use crate::encoding::TextEncoding;

/// How to decode and split the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Declared text encoding. A byte-order mark in the file takes precedence.
    pub encoding: TextEncoding,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: TextEncoding::Utf16,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
