//! Key-value persistence for employees and work entries.
//!
//! The store keeps one JSON array per well-known key. Two backends exist:
//! [`MemoryStore`] for tests and throwaway runs, and [`JsonFileStore`] which
//! writes one file per key with an atomic rename.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::{PayrollError, PayrollResult};

/// Key holding the registered employees.
pub const EMPLOYEES_KEY: &str = "employees";

/// Key holding the work log.
pub const WORK_ENTRIES_KEY: &str = "work_entries";

/// A minimal string key-value store.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> PayrollResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> PayrollResult<()>;
}

/// Reads a JSON array of records, or an empty list if the key is unset.
pub fn load_records<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> PayrollResult<Vec<T>> {
    match store.get(key)? {
        Some(json) => serde_json::from_str(&json).map_err(|e| PayrollError::Storage {
            path: key.to_string(),
            message: format!("Failed to parse records: {}", e),
        }),
        None => Ok(Vec::new()),
    }
}

/// Writes records as a JSON array under `key`.
pub fn save_records<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    records: &[T],
) -> PayrollResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| PayrollError::Storage {
        path: key.to_string(),
        message: format!("Failed to serialize records: {}", e),
    })?;
    store.set(key, &json)
}

/// Opens the backend selected by the configuration.
pub fn open_store(config: &StorageConfig) -> PayrollResult<Box<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StorageBackend::JsonFile => {
            let store = JsonFileStore::open(&config.data_dir)?;
            debug!(data_dir = %store.data_dir().display(), "Opened JSON file store");
            Ok(Box::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    #[test]
    fn test_load_records_from_unset_key_is_empty() {
        let store = MemoryStore::new();
        let employees: Vec<Employee> = load_records(&store, EMPLOYEES_KEY).unwrap();
        assert!(employees.is_empty());
    }

    #[test]
    fn test_save_then_load_records() {
        let mut store = MemoryStore::new();
        let employees = vec![Employee {
            id: "emp_001".to_string(),
            name: "Yamada Taro".to_string(),
            hourly_rate: Decimal::new(1200, 0),
        }];

        save_records(&mut store, EMPLOYEES_KEY, &employees).unwrap();
        let loaded: Vec<Employee> = load_records(&store, EMPLOYEES_KEY).unwrap();
        assert_eq!(loaded, employees);
    }

    #[test]
    fn test_load_records_rejects_corrupt_value() {
        let mut store = MemoryStore::new();
        store.set(EMPLOYEES_KEY, "{not json").unwrap();

        let result: PayrollResult<Vec<Employee>> = load_records(&store, EMPLOYEES_KEY);
        match result {
            Err(PayrollError::Storage { path, .. }) => assert_eq!(path, EMPLOYEES_KEY),
            other => panic!("Expected Storage error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_store_selects_backend() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::JsonFile,
            data_dir: temp_dir.path().join("data"),
        };

        let mut store = open_store(&config).unwrap();
        store.set(WORK_ENTRIES_KEY, "[]").unwrap();
        assert!(temp_dir.path().join("data").join("work_entries.json").exists());

        let memory = open_store(&StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: temp_dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(memory.get(WORK_ENTRIES_KEY).unwrap(), None);
    }
}
