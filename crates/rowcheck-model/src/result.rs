//! The persisted result of a validation run.

use serde::{Deserialize, Serialize};

/// Final output of a run: the assignment variant and the checksum of the
/// invalid row numbers.
///
/// Field order is part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub variant: u32,
    pub checksum: String,
}

impl ResultRecord {
    pub fn new(variant: u32, checksum: impl Into<String>) -> Self {
        Self {
            variant,
            checksum: checksum.into(),
        }
    }
}
