//! File-backed medium: one JSON file per key.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::KeyValueMedium;
use crate::error::MediumError;

/// Stores each key as `<root>/<key>.json`.
///
/// Writes go to a sibling temp file which is synced and then renamed over
/// the target, so readers see either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileMedium {
    root: PathBuf,
}

impl FileMedium {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, MediumError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueMedium for FileMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        let path = self.path_for(key)?;
        tokio::task::spawn_blocking(move || read_value(&path))
            .await
            .map_err(|source| MediumError::Task { source })?
    }

    async fn set(&self, key: &str, value: String) -> Result<(), MediumError> {
        let path = self.path_for(key)?;
        tokio::task::spawn_blocking(move || write_value(&path, value.as_bytes()))
            .await
            .map_err(|source| MediumError::Task { source })?
    }
}

fn validate_key(key: &str) -> Result<(), MediumError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(MediumError::InvalidKey {
            key: key.to_string(),
        })
    }
}

fn read_value(path: &Path) -> Result<Option<String>, MediumError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MediumError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn write_value(path: &Path, bytes: &[u8]) -> Result<(), MediumError> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MediumError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| MediumError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| MediumError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| MediumError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| MediumError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
