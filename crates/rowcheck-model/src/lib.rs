//! Shared data types for the rowcheck pipeline.
//!
//! - [`Record`]: one data row keyed by header column name
//! - [`InvalidRows`]: 1-based numbers of rows that failed validation
//! - [`ResultRecord`]: the persisted `{variant, checksum}` pair

pub mod record;
pub mod result;
pub mod rows;

pub use record::Record;
pub use result::ResultRecord;
pub use rows::{InvalidRows, RowIndex};
