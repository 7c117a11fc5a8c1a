//! On-disk format for the vector index: a single JSON document with the
//! declared dimension and the items in insertion order.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Absent in legacy files, which deserialize as version 0.
    #[serde(default)]
    pub version: u32,
    pub dim: usize,
    pub items: Vec<SnapshotItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub id: String,
    pub vector: Vec<f32>,
}

pub fn read(path: &Path) -> Result<Snapshot, DomainError> {
    let data = std::fs::read_to_string(path).map_err(|e| persistence(path, e))?;
    let snapshot: Snapshot = serde_json::from_str(&data).map_err(|e| persistence(path, e))?;

    if snapshot.dim == 0 {
        return Err(persistence(path, "declared dimension must be positive"));
    }
    for item in &snapshot.items {
        if item.vector.len() != snapshot.dim {
            return Err(persistence(
                path,
                format!(
                    "vector for '{}' has length {}, expected {}",
                    item.id,
                    item.vector.len(),
                    snapshot.dim
                ),
            ));
        }
    }
    Ok(snapshot)
}

pub fn write(path: &Path, snapshot: &Snapshot) -> Result<(), DomainError> {
    let data = serde_json::to_string_pretty(snapshot).map_err(|e| persistence(path, e))?;
    write_atomic(path, &data)
}

/// Write to a sibling temp file, then rename over `path`. The sibling
/// stays on the same filesystem, so the rename is a metadata swap and a
/// crash mid-write leaves the previous snapshot intact.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<(), DomainError> {
    let tmp = tmp_sibling(path);
    std::fs::write(&tmp, data).map_err(|e| persistence(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| persistence(path, e))?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

pub(crate) fn persistence(path: &Path, message: impl ToString) -> DomainError {
    DomainError::Persistence {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}
