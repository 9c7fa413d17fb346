//! The `{variant, checksum}` result file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use rowcheck_model::ResultRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{OutputError, Result};

/// Render a result as 4-space-indented JSON.
///
/// Non-ASCII text is written as-is rather than `\u` escaped. No trailing
/// newline is added.
pub fn serialize_result(record: &ResultRecord) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    record
        .serialize(&mut serializer)
        .map_err(|source| OutputError::Serialize {
            what: "result",
            source,
        })?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a result file as UTF-8, replacing any existing file.
///
/// The content goes to a temporary sibling first and is renamed into place,
/// so a failed write never leaves a truncated result behind.
pub fn write_result(path: &Path, record: &ResultRecord) -> Result<()> {
    let json = serialize_result(record)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::Write {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_file(&temp_path, json.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::info!(path = %path.display(), "wrote result file");
    Ok(())
}

/// Read a result file written by [`write_result`] (or any equivalent JSON).
pub fn read_result(path: &Path) -> Result<ResultRecord> {
    let text = fs::read_to_string(path).map_err(|e| OutputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| OutputError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| OutputError::Write {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| OutputError::Write {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| OutputError::Write {
        operation: "sync",
        path: path.to_path_buf(),
        source: e,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".tmp");
    path.with_file_name(name)
}
