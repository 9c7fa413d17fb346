//! Decoding plus delimited parsing of a whole input file.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::encoding::decode_file;
use crate::error::{IngestError, Result};
use crate::options::ScanOptions;

use super::header::CsvHeaders;

/// A fully parsed input file: header plus data rows in file order.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    pub headers: CsvHeaders,
    pub rows: Vec<StringRecord>,
}

impl DelimitedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Reads, decodes, and parses `path`.
///
/// The first record is the header. Rows may be shorter or longer than the
/// header; shape is checked later against the pattern table. Quoted fields
/// follow the usual doubled-quote convention.
pub fn read_delimited(path: &Path, options: &ScanOptions) -> Result<DelimitedTable> {
    let text = decode_file(path, options.encoding)?;
    parse_delimited(&text, path, options.delimiter)
}

fn parse_delimited(text: &str, path: &Path, delimiter: u8) -> Result<DelimitedTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => CsvHeaders::new(record.map_err(|e| csv_error(path, &e))?.iter()),
        None => {
            return Err(IngestError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
    };
    if headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let rows = records
        .map(|record| record.map_err(|e| csv_error(path, &e)))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "parsed delimited file"
    );

    Ok(DelimitedTable { headers, rows })
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::encoding::TextEncoding;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn utf8_options() -> ScanOptions {
        ScanOptions::default().with_encoding(TextEncoding::Utf8)
    }

    #[test]
    fn test_read_semicolon_delimited() {
        let file = create_temp_file("a;b;c\n1;2;3\n4;5;6\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(table.headers.columns, vec!["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(&table.rows[1][2], "6");
    }

    #[test]
    fn test_commas_are_data_not_delimiters() {
        let file = create_temp_file("a;b\nx,y;z\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(&table.rows[0][0], "x,y");
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let file = create_temp_file("a;b\n\"one; two\";three\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(&table.rows[0][0], "one; two");
        assert_eq!(&table.rows[0][1], "three");
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let file = create_temp_file("a;b;c\n1\n1;2;3;4\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let file = create_temp_file("a;b\r\n1;2\r\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(table.headers.columns, vec!["a", "b"]);
        assert_eq!(&table.rows[0][1], "2");
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_file("");
        let result = read_delimited(file.path(), &utf8_options());

        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_header_only() {
        let file = create_temp_file("a;b\n");
        let table = read_delimited(file.path(), &utf8_options()).unwrap();

        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_blank_header_is_rejected() {
        let file = create_temp_file(";\n1;2\n");
        let result = read_delimited(file.path(), &utf8_options());

        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }
}
