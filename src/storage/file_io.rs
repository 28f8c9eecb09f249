//! File I/O utilities with atomic writes
//!
//! Writes go to a temp file next to the target and are renamed into place,
//! so a failed write never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinanceError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, FinanceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(FinanceError::Snapshot(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| FinanceError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| FinanceError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), FinanceError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinanceError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| FinanceError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents)
        .map_err(|e| FinanceError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinanceError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinanceError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinanceError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Serialize to pretty JSON and write atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinanceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let contents = serde_json::to_vec_pretty(data)
        .map_err(|e| FinanceError::Json(format!("Failed to serialize data: {}", e)))?;
    write_atomic(path, &contents)
}
