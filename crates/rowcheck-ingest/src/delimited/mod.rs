//! Delimited text reading.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{DelimitedTable, read_delimited};
