//! Checksum over the set of invalid row numbers.
//!
//! The digest input is the ascending list rendered as a JSON array with `", "`
//! between items and no other whitespace (`[]`, `[4]`, `[3, 7, 9]`). That
//! exact text is what stored results were computed from, so the separator
//! style must not change.

use std::io;

use md5::{Digest, Md5};
use rowcheck_model::InvalidRows;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Compact JSON arrays with `", "` between items.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Render row numbers as canonical JSON text, in the order given.
pub fn canonical_json(rows: &[u64]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, CanonicalFormatter);
    rows.serialize(&mut serializer)
        .map_err(|source| OutputError::Serialize {
            what: "row numbers",
            source,
        })?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// MD5 of the sorted row numbers' canonical JSON, as lowercase hex.
pub fn compute_checksum(rows: InvalidRows) -> Result<String> {
    let sorted = rows.into_sorted();
    let canonical = canonical_json(&sorted)?;
    let digest = Md5::digest(canonical.as_bytes());
    let checksum = hex::encode(digest);
    debug!(rows = sorted.len(), %checksum, "computed checksum");
    Ok(checksum)
}

/// Recompute the checksum and compare it to `expected` (case-insensitive).
///
/// Returns the recomputed checksum on success.
pub fn verify_checksum(rows: InvalidRows, expected: &str) -> Result<String> {
    let actual = compute_checksum(rows)?;
    let expected = expected.trim().to_lowercase();
    if actual != expected {
        return Err(OutputError::ChecksumMismatch { expected, actual });
    }
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_json_spacing() {
        assert_eq!(canonical_json(&[]).unwrap(), "[]");
        assert_eq!(canonical_json(&[1]).unwrap(), "[1]");
        assert_eq!(canonical_json(&[3, 7, 9]).unwrap(), "[3, 7, 9]");
    }

    #[test]
    fn test_canonical_json_keeps_given_order() {
        assert_eq!(canonical_json(&[9, 3]).unwrap(), "[9, 3]");
    }

    #[test]
    fn test_empty_set_checksum() {
        // md5("[]")
        assert_eq!(
            compute_checksum(InvalidRows::new()).unwrap(),
            "d751713988987e9331980363e24189ce"
        );
    }

    #[test]
    fn test_known_checksum() {
        // md5("[3, 7, 9]")
        assert_eq!(
            compute_checksum(InvalidRows::from(vec![3, 7, 9])).unwrap(),
            "e4cad8e19a57da50f84d42ac0b8fff1a"
        );
    }

    #[test]
    fn test_checksum_sorts_before_hashing() {
        assert_eq!(
            compute_checksum(InvalidRows::from(vec![3, 1, 2])).unwrap(),
            compute_checksum(InvalidRows::from(vec![1, 2, 3])).unwrap()
        );
        assert_eq!(
            compute_checksum(InvalidRows::from(vec![2, 3, 1])).unwrap(),
            "49a5a960c5714c2e29dd1a7e7b950741"
        );
    }

    #[test]
    fn test_verify_checksum_accepts_uppercase() {
        let result = verify_checksum(
            InvalidRows::from(vec![9, 7, 3]),
            "E4CAD8E19A57DA50F84D42AC0B8FFF1A",
        );
        assert_eq!(result.unwrap(), "e4cad8e19a57da50f84d42ac0b8fff1a");
    }

    #[test]
    fn test_verify_checksum_mismatch() {
        let result = verify_checksum(InvalidRows::from(vec![1]), "d751713988987e9331980363e24189ce");
        assert!(matches!(result, Err(OutputError::ChecksumMismatch { .. })));
    }
}
