//! Output side of the rowcheck pipeline.
//!
//! - [`compute_checksum`]: MD5 over the sorted invalid row numbers
//! - [`write_result`] / [`read_result`]: the `{variant, checksum}` JSON file

mod checksum;
mod error;
mod result;

pub use checksum::{canonical_json, compute_checksum, verify_checksum};
pub use error::{OutputError, Result};
pub use result::{read_result, serialize_result, write_result};
