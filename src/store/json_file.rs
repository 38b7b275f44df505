//! JSON file store with atomic writes.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PayrollError, PayrollResult};

use super::KeyValueStore;

/// A store that keeps each key in `<data_dir>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> PayrollResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| PayrollError::Storage {
            path: data_dir.display().to_string(),
            message: format!("Failed to create directory: {}", e),
        })?;
        Ok(Self { data_dir })
    }

    /// The directory holding the key files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> PayrollResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| PayrollError::Storage {
                path: path.display().to_string(),
                message: format!("Failed to read: {}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> PayrollResult<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");
        let storage_error = |message: String| PayrollError::Storage {
            path: path.display().to_string(),
            message,
        };

        let mut file = File::create(&temp_path)
            .map_err(|e| storage_error(format!("Failed to create temp file: {}", e)))?;
        file.write_all(value.as_bytes())
            .map_err(|e| storage_error(format!("Failed to write: {}", e)))?;
        file.sync_all()
            .map_err(|e| storage_error(format!("Failed to sync: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            storage_error(format!("Failed to rename temp file: {}", e))
        })
    }
}
