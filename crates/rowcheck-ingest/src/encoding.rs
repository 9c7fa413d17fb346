//! Text decoding for input files.
//!
//! Decoding is strict: malformed sequences are an error rather than being
//! replaced with U+FFFD.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::error::{IngestError, Result};

/// Supported input encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-16 with byte-order detection; little-endian when no BOM is present.
    #[default]
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf8,
}

impl TextEncoding {
    fn fallback(self) -> &'static Encoding {
        match self {
            Self::Utf16 | Self::Utf16Le => UTF_16LE,
            Self::Utf16Be => UTF_16BE,
            Self::Utf8 => UTF_8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Utf16 => "UTF-16",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf8 => "UTF-8",
        }
    }
}

/// Decode raw bytes, honouring a leading byte-order mark.
///
/// Returns the decoded text, or the name of the encoding that rejected the
/// input.
pub fn decode_bytes(
    bytes: &[u8],
    encoding: TextEncoding,
) -> std::result::Result<String, &'static str> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((encoding.fallback(), 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or(encoding.name())
}

/// Read and decode a whole file.
pub fn decode_file(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = encoding.label(),
        "decoding input"
    );

    decode_bytes(&bytes, encoding).map_err(|encoding| IngestError::Encoding {
        path: path.to_path_buf(),
        encoding,
    })
}
